use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    /// HTTP-level failure: a non-success status, or a network fault with no
    /// status at all (DNS, connection reset, timeout).
    #[error("transport failure{}", .status.map_or(String::new(), |s| format!(" (HTTP {s})")))]
    Transport {
        status: Option<u16>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The payload carried a non-success result code from the upstream API.
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Valid response with zero meal rows. A normal empty state, not a failure.
    #[error("no meal data for the requested date")]
    NoMealData,
}

pub type Result<T> = std::result::Result<T, MealError>;
