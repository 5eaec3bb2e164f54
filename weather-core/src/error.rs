use thiserror::Error;

/// The payload (or its HTTP envelope) could not be turned into a forecast.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("forecast request failed: {status} {status_text}")]
    HttpStatus { status: u16, status_text: String },

    #[error("malformed forecast payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("forecast payload has no hourly rows")]
    EmptyHourly,

    #[error("{table}.{field} has {actual} entries, expected {expected}")]
    LengthMismatch {
        table: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{table}_units.{field} is '{actual}', expected '{expected}'")]
    UnexpectedUnit {
        table: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
}

/// Everything `fetch_weather` can fail with.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to reach forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl WeatherError {
    /// Network failures and non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WeatherError::Transport(_) | WeatherError::Decode(DecodeError::HttpStatus { .. })
        )
    }
}
