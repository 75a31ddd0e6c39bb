use crate::currency::CurrencyCode;
use crate::date::RateDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::Deserialize;

pub const NBU_BASE_URL: &str = "https://bank.gov.ua/NBUStatService/v1/statdirectory";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The NBU answered, but not with any rate. It reports a failed lookup and a day without data
    /// the same way, so the two are not told apart.
    #[error("no rate data available")]
    NoData,
    #[error("failure while accessing the NBU: {0}")]
    Transport(String),
}

/// The three queries the `exchange` directory answers.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// Every currency, for the current day
    Today,
    /// Every currency, for one day
    Day(&'a RateDate),
    /// One currency, for one day
    Currency(&'a CurrencyCode, &'a RateDate),
}

impl Endpoint<'_> {
    pub fn path_and_query(&self) -> String {
        match self {
            Endpoint::Today => "exchange?json".to_string(),
            Endpoint::Day(date) => format!("exchange?date={}&json", date.wire()),
            Endpoint::Currency(code, date) => {
                format!("exchange?valcode={code}&date={}&json", date.wire())
            }
        }
    }
}

/// One row of an `exchange` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateRecord {
    /// Currency code (e.g. USD)
    pub cc: String,
    /// Value of 1 unit of the currency in UAH
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Ukrainian name of the currency
    #[serde(default)]
    pub txt: String,
    /// Day the rate applies to (format: DD.MM.YYYY)
    #[serde(default)]
    pub exchangedate: String,
}

/// Source of NBU `exchange` responses.
pub trait ExchangeApi {
    fn exchange(&self, endpoint: &Endpoint<'_>) -> Result<Vec<RateRecord>, FetchError>;
}

pub fn parse_records(body: &str) -> Result<Vec<RateRecord>, FetchError> {
    serde_json::from_str(body)
        .map_err(|e| FetchError::Transport(format!("failed to parse exchange data: {e}")))
}

/// Blocking client for the NBU statistics directory.
#[derive(Debug, Clone)]
pub struct NbuClient {
    base_url: String,
}

impl NbuClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn url(&self, endpoint: &Endpoint<'_>) -> String {
        format!("{}/{}", self.base_url, endpoint.path_and_query())
    }
}

impl Default for NbuClient {
    fn default() -> Self {
        Self::new(NBU_BASE_URL)
    }
}

impl ExchangeApi for NbuClient {
    fn exchange(&self, endpoint: &Endpoint<'_>) -> Result<Vec<RateRecord>, FetchError> {
        let url = self.url(endpoint);
        debug!("GET {url}");

        let mut resp = ureq::get(url.as_str()).call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => {
                warn!("NBU answered {url} with status {status}");
                FetchError::NoData
            }
            other => FetchError::Transport(other.to_string()),
        })?;
        if !resp.status().is_success() {
            warn!("NBU answered {url} with status {}", resp.status());
            return Err(FetchError::NoData);
        }

        let body = resp
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_records(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, FetchError, NbuClient, parse_records};
    use crate::currency::CurrencyCode;
    use crate::date::RateDate;
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    #[test]
    fn test_endpoint_queries() {
        let day = RateDate::today(date(2023, 5, 1));
        let usd = CurrencyCode::new_unchecked("USD");

        assert_eq!(Endpoint::Today.path_and_query(), "exchange?json");
        assert_eq!(
            Endpoint::Day(&day).path_and_query(),
            "exchange?date=20230501&json"
        );
        assert_eq!(
            Endpoint::Currency(&usd, &day).path_and_query(),
            "exchange?valcode=USD&date=20230501&json"
        );
    }

    #[test]
    fn test_client_url() {
        let client = NbuClient::new("http://localhost:8080/statdirectory/");
        assert_eq!(
            client.url(&Endpoint::Today),
            "http://localhost:8080/statdirectory/exchange?json"
        );
        assert_eq!(
            NbuClient::default().url(&Endpoint::Today),
            "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange?json"
        );
    }

    #[test]
    fn test_parse_records() {
        let body = r#"[
            {"r030":840,"txt":"Долар США","rate":36.5686,"cc":"USD","exchangedate":"01.05.2023"},
            {"r030":978,"txt":"Євро","rate":40.2489,"cc":"EUR","exchangedate":"01.05.2023"},
            {"r030":348,"txt":"Форинт","rate":11,"cc":"HUF","exchangedate":"01.05.2023"}
        ]"#;
        let records = parse_records(body).expect("valid payload");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].cc, "USD");
        assert_eq!(records[0].rate, dec!(36.5686));
        assert_eq!(records[1].exchangedate, "01.05.2023");
        assert_eq!(records[2].rate, dec!(11));
    }

    #[test]
    fn test_parse_empty_and_broken() {
        assert_eq!(parse_records("[]"), Ok(vec![]));
        assert!(matches!(
            parse_records("<html>maintenance</html>"),
            Err(FetchError::Transport(_))
        ));
    }
}
