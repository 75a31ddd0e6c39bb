use crate::api::{Endpoint, ExchangeApi, FetchError, RateRecord};
use rust_decimal::Decimal;
use std::cell::Cell;
use std::collections::HashMap;

/// In-memory stand-in for the NBU, answering by query string.
#[derive(Default)]
pub(crate) struct FakeApi {
    responses: HashMap<String, Vec<RateRecord>>,
    failure: Option<FetchError>,
    calls: Cell<usize>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn today(self, rows: &[(&str, &str)]) -> Self {
        self.respond("exchange?json", rows)
    }

    pub(crate) fn day(self, wire_date: &str, rows: &[(&str, &str)]) -> Self {
        self.respond(&format!("exchange?date={wire_date}&json"), rows)
    }

    pub(crate) fn currency(self, code: &str, wire_date: &str, rows: &[(&str, &str)]) -> Self {
        self.respond(
            &format!("exchange?valcode={code}&date={wire_date}&json"),
            rows,
        )
    }

    pub(crate) fn failing(mut self, error: FetchError) -> Self {
        self.failure = Some(error);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    fn respond(mut self, query: &str, rows: &[(&str, &str)]) -> Self {
        let records = rows
            .iter()
            .map(|(cc, rate)| RateRecord {
                cc: cc.to_string(),
                rate: rate.parse::<Decimal>().expect("test rate should be a decimal"),
                txt: String::new(),
                exchangedate: String::new(),
            })
            .collect();
        self.responses.insert(query.to_string(), records);
        self
    }
}

impl ExchangeApi for FakeApi {
    fn exchange(&self, endpoint: &Endpoint<'_>) -> Result<Vec<RateRecord>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self
            .responses
            .get(&endpoint.path_and_query())
            .cloned()
            .unwrap_or_default())
    }
}
