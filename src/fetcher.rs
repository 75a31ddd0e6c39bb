use crate::api::{Endpoint, ExchangeApi, FetchError};
use crate::currency::CurrencyCode;
use crate::date::RateDate;
use crate::resolver::RateQuery;
use rust_decimal::Decimal;

/// How a rate is looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Ask the NBU for the one currency, and take the first record it returns
    #[default]
    Targeted,
    /// Download the whole day's table and pick the currency out of it by exact code
    DayTable,
}

/// Official rate of one currency on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub currency: CurrencyCode,
    pub date: RateDate,
    /// Value of 1 unit of the currency in UAH
    pub rate: Decimal,
}

pub struct RateFetcher<'a> {
    api: &'a dyn ExchangeApi,
    mode: FetchMode,
}

impl<'a> RateFetcher<'a> {
    pub fn new(api: &'a dyn ExchangeApi, mode: FetchMode) -> Self {
        Self { api, mode }
    }

    pub fn fetch(&self, query: &RateQuery) -> Result<ExchangeRate, FetchError> {
        let records = match self.mode {
            FetchMode::Targeted => self
                .api
                .exchange(&Endpoint::Currency(&query.currency, &query.date))?,
            FetchMode::DayTable => self
                .api
                .exchange(&Endpoint::Day(&query.date))?
                .into_iter()
                .filter(|record| record.cc == query.currency.as_str())
                .collect(),
        };

        let record = records.into_iter().next().ok_or(FetchError::NoData)?;
        Ok(ExchangeRate {
            currency: query.currency.clone(),
            date: query.date,
            rate: record.rate,
        })
    }
}
