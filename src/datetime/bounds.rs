//! Day and month boundary derivations

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Number of days in the given month, leap years included
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .expect("month boundary within supported date range")
}

/// Boundary derivations on a timestamp
pub trait DateBoundsExt: Sized {
    /// Truncate to midnight
    fn day_start(&self) -> Self;

    /// 23:59:59.999 of the same day
    fn day_end(&self) -> Self;

    /// First day of the month, midnight
    fn month_start(&self) -> Self;

    /// Last calendar day of the month, 23:59:59.999
    fn month_end(&self) -> Self;
}

impl DateBoundsExt for NaiveDateTime {
    fn day_start(&self) -> Self {
        self.date().and_hms_opt(0, 0, 0).expect("midnight is valid")
    }

    fn day_end(&self) -> Self {
        self.date()
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is valid")
    }

    fn month_start(&self) -> Self {
        self.date()
            .with_day(1)
            .expect("day 1 is valid in every month")
            .and_hms_opt(0, 0, 0)
            .expect("midnight is valid")
    }

    fn month_end(&self) -> Self {
        let last_day = days_in_month(self.year(), self.month());
        NaiveDate::from_ymd_opt(self.year(), self.month(), last_day)
            .expect("last day of month is valid")
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date1() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 1, 5)
            .unwrap()
            .and_hms_milli_opt(12, 45, 6, 123)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(hh, mm, ss, ms)
            .unwrap()
    }

    #[test]
    fn day_start() {
        assert_eq!(date1().day_start(), at(2013, 1, 5, 0, 0, 0, 0));
    }

    #[test]
    fn day_end() {
        assert_eq!(date1().day_end(), at(2013, 1, 5, 23, 59, 59, 999));
    }

    #[test]
    fn month_start() {
        assert_eq!(date1().month_start(), at(2013, 1, 1, 0, 0, 0, 0));
    }

    #[test]
    fn month_end() {
        assert_eq!(date1().month_end(), at(2013, 1, 31, 23, 59, 59, 999));
    }

    #[test]
    fn month_end_stays_in_month() {
        for month in 1..=12 {
            let dt = at(2013, month, 5, 12, 0, 0, 0);
            assert_eq!(dt.month_end().month(), month);
        }
    }

    #[test]
    fn month_end_february_leap_years() {
        assert_eq!(
            at(2013, 2, 10, 8, 0, 0, 0).month_end(),
            at(2013, 2, 28, 23, 59, 59, 999)
        );
        assert_eq!(
            at(2016, 2, 10, 8, 0, 0, 0).month_end(),
            at(2016, 2, 29, 23, 59, 59, 999)
        );
        assert_eq!(
            at(2000, 2, 10, 8, 0, 0, 0).month_end(),
            at(2000, 2, 29, 23, 59, 59, 999)
        );
        // century years not divisible by 400 are not leap years
        assert_eq!(
            at(1900, 2, 10, 8, 0, 0, 0).month_end(),
            at(1900, 2, 28, 23, 59, 59, 999)
        );
    }

    #[test]
    fn days_in_month_table() {
        assert_eq!(days_in_month(2013, 1), 31);
        assert_eq!(days_in_month(2013, 4), 30);
        assert_eq!(days_in_month(2013, 12), 31);
        assert_eq!(days_in_month(2016, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }
}
