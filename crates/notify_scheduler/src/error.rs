use chrono::NaiveDate;
use std::io;

/// Scheduler calendar errors
///
/// The reducer itself never fails; these only come out of the edges that
/// parse input from the presentation layer or load configuration.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("availability window starts {first} after it ends {last}")]
    InvalidAvailability { first: NaiveDate, last: NaiveDate },

    #[error("cannot select {date}: {reason}")]
    InvalidSelection { date: NaiveDate, reason: &'static str },

    #[error("invalid payload for {tag}: {reason}")]
    InvalidPayload { tag: &'static str, reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn invalid_payload(tag: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidPayload {
            tag,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
