use clap::Parser;
use jiff::civil::Date;
use log::{error, warn};
use std::io::Write;
use std::process::ExitCode;

pub mod api;
pub mod currency;
pub mod date;
pub mod fetcher;
pub mod report;
pub mod resolver;

#[cfg(test)]
mod test_support;

use crate::api::{ExchangeApi, NBU_BASE_URL, NbuClient};
use crate::currency::{CurrencyValidator, KnownCurrencies};
use crate::fetcher::{FetchMode, RateFetcher};
use crate::report::Report;
use crate::resolver::resolve;

/// Get the official hryvnia exchange rate of a currency from the National Bank of Ukraine.
///
/// Defaults to the rate for the current day. Rates are published from 1999 onwards.
#[derive(Parser)]
pub struct Cli {
    /// Three letter currency code, in any case (e.g. USD)
    #[arg(value_name = "CURRENCY")]
    pub currency: Option<String>,
    /// Date of the rate (format: YYYY-MM-DD)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Check the currency against the built-in list instead of asking the NBU
    #[clap(long)]
    pub offline_currencies: bool,
    /// Download the whole day's table and look the currency up locally
    #[clap(long)]
    pub full_table: bool,
    /// Base URL of the NBU statistics directory
    #[clap(long, env = "NBU_BASE_URL", default_value = NBU_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    /// Positional arguments in the order they were given
    pub fn tokens(&self) -> Vec<&str> {
        self.currency
            .iter()
            .chain(self.date.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Look up the requested rate against the live NBU service, and print the report to `out`.
pub fn run(args: &Cli, today: Date, out: &mut impl Write) -> ExitCode {
    let client = NbuClient::new(args.base_url.as_str());
    run_with(args, today, &client, out)
}

pub fn run_with(args: &Cli, today: Date, api: &dyn ExchangeApi, out: &mut impl Write) -> ExitCode {
    let known = match args.offline_currencies {
        false => KnownCurrencies::Live(api),
        true => KnownCurrencies::Static,
    };
    let mode = match args.full_table {
        false => FetchMode::Targeted,
        true => FetchMode::DayTable,
    };

    let report = match resolve(&args.tokens(), today, &CurrencyValidator::new(known)) {
        Err(rejection) => Report::Rejected(rejection),
        Ok(query) => match RateFetcher::new(api, mode).fetch(&query) {
            Ok(rate) => Report::Rate(rate),
            Err(e) => {
                warn!("no rate for {} on {}: {e}", query.currency, query.date);
                Report::Failed(e)
            }
        },
    };

    if let Err(e) = write!(out, "{report}") {
        error!("failed to print the report: {e}");
        return ExitCode::FAILURE;
    }
    report.exit_code()
}
