use crate::api::FetchError;
use crate::fetcher::ExchangeRate;
use crate::resolver::Rejection;
use std::fmt;
use std::process::ExitCode;

pub const TOP_BORDER: &str = "______________";
pub const BOTTOM_BORDER: &str = "==============";
/// Shown for missing input and for any failure to get a rate from the NBU
pub const SYSTEM_ERROR: &str = "SystemError";

/// Final result of one run, rendered by `Display` as a framed console message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Rate(ExchangeRate),
    Rejected(Rejection),
    Failed(FetchError),
}

impl Report {
    /// The primary line, and the optional secondary line
    fn lines(&self) -> (String, Option<String>) {
        match self {
            Report::Rate(rate) => (rate.currency.to_string(), Some(rate.rate.to_string())),
            Report::Rejected(Rejection::MissingArguments) | Report::Failed(_) => {
                (SYSTEM_ERROR.to_string(), None)
            }
            Report::Rejected(rejection @ Rejection::InvalidCurrency(label))
            | Report::Rejected(rejection @ Rejection::InvalidDate(label)) => {
                (label.clone(), Some(rejection.to_string()))
            }
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Report::Rate(_) => ExitCode::SUCCESS,
            Report::Rejected(Rejection::InvalidCurrency(_) | Rejection::InvalidDate(_)) => {
                ExitCode::from(2)
            }
            Report::Rejected(Rejection::MissingArguments) | Report::Failed(_) => ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (primary, secondary) = self.lines();
        writeln!(f, "{TOP_BORDER}")?;
        writeln!(f, "{primary}")?;
        if let Some(secondary) = secondary {
            writeln!(f)?;
            writeln!(f, "{secondary}")?;
        }
        writeln!(f, "{BOTTOM_BORDER}")
    }
}
