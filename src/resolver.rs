use crate::currency::{CurrencyCode, CurrencyValidator};
use crate::date::{RateDate, parse_date};
use jiff::civil::Date;

/// Why the command line could not be turned into a rate query. The first bad field wins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no currency given")]
    MissingArguments,
    #[error("Invalid currency name: {0}")]
    InvalidCurrency(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// A currency and day that both passed validation, ready to be sent to the NBU.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RateQuery {
    pub currency: CurrencyCode,
    pub date: RateDate,
}

pub type ResolutionOutcome = Result<RateQuery, Rejection>;

/// Interpret positional arguments as `CURRENCY [DATE]`.
///
/// The currency is upper-cased before validation. Without a date the query is for `today`. The
/// currency is checked first, so an unknown currency is reported even if the date is also wrong.
pub fn resolve<S: AsRef<str>>(
    tokens: &[S],
    today: Date,
    currencies: &CurrencyValidator<'_>,
) -> ResolutionOutcome {
    let Some(raw_currency) = tokens.first() else {
        return Err(Rejection::MissingArguments);
    };

    let code = raw_currency.as_ref().to_uppercase();
    let currency = currencies
        .accept(&code)
        .ok_or(Rejection::InvalidCurrency(code))?;

    let date = match tokens.get(1) {
        None => RateDate::today(today),
        Some(raw_date) => {
            let raw_date = raw_date.as_ref();
            parse_date(raw_date, today)
                .ok_or_else(|| Rejection::InvalidDate(raw_date.to_string()))?
        }
    };

    Ok(RateQuery { currency, date })
}
