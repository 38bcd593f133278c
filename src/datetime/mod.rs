//! Date/time formatting helpers
//!
//! Extension traits over chrono types:
//! - `format`: canonical string renderings (normalized, compact, ISO-8601)
//! - `bounds`: day/month boundary derivations
//! - `locale`: locale-aware month/day name renderers

pub mod bounds;
pub mod format;
pub mod locale;

pub use bounds::{days_in_month, DateBoundsExt};
pub use format::{DateFormatExt, IsoFormat};
pub use locale::{locale_from_env, LocalizedDateExt};
