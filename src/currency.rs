use crate::api::{Endpoint, ExchangeApi, FetchError};
use log::{debug, warn};
use std::collections::HashSet;
use std::fmt;

/// Codes the NBU publishes an official rate for, including the precious metals and XDR.
pub const STATIC_CURRENCIES: &[&str] = &[
    "AED", "AMD", "AUD", "AZN", "BDT", "BGN", "BRL", "BYN", "CAD", "CHF", "CNY", "CZK", "DKK",
    "DZD", "EGP", "EUR", "GBP", "GEL", "HKD", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "JPY",
    "KGS", "KRW", "KZT", "LBP", "LYD", "MAD", "MDL", "MXN", "MYR", "NOK", "NZD", "PKR", "PLN",
    "RON", "RSD", "SAR", "SEK", "SGD", "THB", "TJS", "TMT", "TND", "TRY", "TWD", "USD", "UZS",
    "VND", "XAG", "XAU", "XDR", "XPD", "XPT", "ZAR",
];

/// An upper-case three letter code that was found in the known currency set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(test)]
    pub(crate) fn new_unchecked(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cheap syntactic check, done before any lookup of the known currency set.
pub fn has_code_shape(raw: &str) -> bool {
    raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Where the set of known currency codes comes from.
///
/// Nothing is kept between lookups; the live set is fetched again each time it is needed.
#[derive(Clone, Copy)]
pub enum KnownCurrencies<'a> {
    /// The catalogue built into the binary
    Static,
    /// Codes listed in the current day's NBU table
    Live(&'a dyn ExchangeApi),
}

impl KnownCurrencies<'_> {
    pub fn codes(&self) -> Result<HashSet<String>, FetchError> {
        match self {
            KnownCurrencies::Static => Ok(STATIC_CURRENCIES.iter().map(|c| c.to_string()).collect()),
            KnownCurrencies::Live(api) => Ok(api
                .exchange(&Endpoint::Today)?
                .into_iter()
                .map(|record| record.cc)
                .collect()),
        }
    }
}

pub struct CurrencyValidator<'a> {
    known: KnownCurrencies<'a>,
}

impl<'a> CurrencyValidator<'a> {
    pub fn new(known: KnownCurrencies<'a>) -> Self {
        Self { known }
    }

    /// Returns the code if it is well formed and the NBU knows it. Codes are compared as given,
    /// callers normalise case first.
    ///
    /// A failure to load the live set rejects every code.
    pub fn accept(&self, raw: &str) -> Option<CurrencyCode> {
        if !has_code_shape(raw) {
            debug!("{raw:?} is not shaped like a currency code");
            return None;
        }
        match self.known.codes() {
            Ok(codes) => codes.contains(raw).then(|| CurrencyCode(raw.to_string())),
            Err(e) => {
                warn!("could not load the known currency list: {e}");
                None
            }
        }
    }

    pub fn validate(&self, raw: &str) -> bool {
        self.accept(raw).is_some()
    }
}
