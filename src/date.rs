use jiff::civil::Date;
use std::fmt;

/// Earliest year the NBU publishes official rates for.
pub const FIRST_YEAR: i16 = 1999;

/// A validated day to ask the NBU about.
///
/// Only produced by [`parse_date`] or [`RateDate::today`], so a value of this type is never in the
/// future and never before [`FIRST_YEAR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RateDate(Date);

impl RateDate {
    /// Rates for the current day. `today` comes from the caller, never from the clock.
    pub fn today(today: Date) -> Self {
        Self(today)
    }

    pub fn date(&self) -> Date {
        self.0
    }

    /// Format expected by the NBU `date` query parameter (YYYYMMDD).
    pub fn wire(&self) -> String {
        self.0.strftime("%Y%m%d").to_string()
    }
}

impl fmt::Display for RateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parse a user supplied `YYYY-MM-DD` date, accepting it only if it exists on the calendar, is not
/// after `today` and is not earlier than [`FIRST_YEAR`].
pub fn parse_date(raw: &str, today: Date) -> Option<RateDate> {
    if !has_iso_shape(raw) {
        return None;
    }
    let date: Date = raw.parse().ok()?;
    (date.year() >= FIRST_YEAR && date <= today).then_some(RateDate(date))
}

pub fn validate_date(raw: &str, today: Date) -> bool {
    parse_date(raw, today).is_some()
}

// jiff also understands the basic (hyphen-less) and datetime forms, only the extended date is allowed
fn has_iso_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
