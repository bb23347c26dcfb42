use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FdError {
    /// The underlying HTTP transport failed (connection refused, TLS, body read, ...).
    ///
    /// Transport failures are never retried; they surface exactly as reqwest reported them.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The final response of a request carried a non-success status.
    ///
    /// This is also what a still-rate-limited (429) response turns into once retries are
    /// exhausted and the caller requires a successful body.
    #[error("Request failed with status {status} at {url}: {body}")]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The response body, verbatim.
        body: String,
    },

    /// No API key was configured on the client and the environment variable was unset.
    #[error("API key not configured: set {0} or use FdClientBuilder::api_key")]
    MissingApiKey(&'static str),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A request parameter was rejected before anything was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,
}
