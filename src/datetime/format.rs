//! Canonical string renderings for timestamps
//!
//! The ISO rendering keeps seven fractional digits and derives its timezone
//! suffix from the input type: naive values carry no suffix, UTC values end
//! in `Z`, local values end in the environment's signed offset at that
//! instant.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike, Utc};

/// Canonical formats shared by every timestamp kind
pub trait DateFormatExt {
    /// `YYYY-MM-DD HH:MM:SS`
    fn normalized_format(&self) -> String;

    /// `YYYY-MM-DD`
    fn normalized_date_format(&self) -> String;

    /// `YYYYMMDDHHMMSS`
    fn compact_format(&self) -> String;

    /// `YYYYMMDD`
    fn compact_date_format(&self) -> String;
}

impl DateFormatExt for NaiveDateTime {
    fn normalized_format(&self) -> String {
        self.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    fn normalized_date_format(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }

    fn compact_format(&self) -> String {
        self.format("%Y%m%d%H%M%S").to_string()
    }

    fn compact_date_format(&self) -> String {
        self.format("%Y%m%d").to_string()
    }
}

impl<Tz: TimeZone> DateFormatExt for DateTime<Tz> {
    fn normalized_format(&self) -> String {
        self.naive_local().normalized_format()
    }

    fn normalized_date_format(&self) -> String {
        self.naive_local().normalized_date_format()
    }

    fn compact_format(&self) -> String {
        self.naive_local().compact_format()
    }

    fn compact_date_format(&self) -> String {
        self.naive_local().compact_date_format()
    }
}

/// ISO-8601 rendering with a kind-determined timezone suffix
pub trait IsoFormat {
    fn iso_format(&self) -> String;
}

/// Seven fractional digits, matching tick precision of upstream consumers
fn iso_base(dt: &NaiveDateTime) -> String {
    format!("{}.{:07}", dt.format("%Y-%m-%dT%H:%M:%S"), dt.nanosecond() / 100)
}

impl IsoFormat for NaiveDateTime {
    fn iso_format(&self) -> String {
        iso_base(self)
    }
}

impl IsoFormat for DateTime<Utc> {
    fn iso_format(&self) -> String {
        format!("{}Z", iso_base(&self.naive_utc()))
    }
}

impl IsoFormat for DateTime<Local> {
    fn iso_format(&self) -> String {
        let offset_secs = self.offset().local_minus_utc();
        let sign = if offset_secs < 0 { '-' } else { '+' };
        let abs = offset_secs.unsigned_abs();
        format!(
            "{}{}{:02}:{:02}",
            iso_base(&self.naive_local()),
            sign,
            abs / 3600,
            abs % 3600 / 60
        )
    }
}
