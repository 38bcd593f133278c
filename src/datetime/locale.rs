//! Locale-aware month and day renderers
//!
//! Thin delegation to chrono's localized calendar formatting. The locale is
//! an explicit argument; `locale_from_env` discovers the environment's
//! preference the way POSIX tools do.

use std::env;

use chrono::{Locale, NaiveDateTime};

/// Locale-dependent name renderers
pub trait LocalizedDateExt {
    /// Full month name, e.g. "January"
    fn month_name(&self, locale: Locale) -> String;

    /// Abbreviated month name, e.g. "Jan"
    fn short_month_name(&self, locale: Locale) -> String;

    /// Month + day, e.g. "January 5"
    fn day_month(&self, locale: Locale) -> String;

    /// Month + year, e.g. "January 2013"
    fn month_year(&self, locale: Locale) -> String;
}

impl LocalizedDateExt for NaiveDateTime {
    fn month_name(&self, locale: Locale) -> String {
        self.date().format_localized("%B", locale).to_string()
    }

    fn short_month_name(&self, locale: Locale) -> String {
        self.date().format_localized("%b", locale).to_string()
    }

    fn day_month(&self, locale: Locale) -> String {
        self.date().format_localized("%B %-d", locale).to_string()
    }

    fn month_year(&self, locale: Locale) -> String {
        self.date().format_localized("%B %Y", locale).to_string()
    }
}

/// Resolve the environment's locale from `LC_ALL`, `LC_TIME` or `LANG`,
/// falling back to POSIX when unset or unrecognized
pub fn locale_from_env() -> Locale {
    for key in ["LC_ALL", "LC_TIME", "LANG"] {
        if let Ok(value) = env::var(key) {
            if value.is_empty() {
                continue;
            }
            // "en_US.UTF-8" / "en_US@euro" -> "en_US"
            let tag = value.split(['.', '@']).next().unwrap_or_default();
            if let Ok(locale) = Locale::try_from(tag) {
                return locale;
            }
        }
    }
    Locale::POSIX
}
