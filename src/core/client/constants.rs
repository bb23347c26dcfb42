//! Centralized constants for default endpoints, headers and UA.

/// Default UA identifying this client.
pub(crate) const USER_AGENT: &str = concat!("findata-rs/", env!("CARGO_PKG_VERSION"));

/// Financial Datasets API base (resource paths are joined onto it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.financialdatasets.ai/";

/// Environment variable the API key is read from when none is set on the builder.
pub const API_KEY_ENV: &str = "FINANCIAL_DATASETS_API_KEY";

/// Header carrying the API key on every request (`X-API-KEY`; HTTP names are case-insensitive).
pub const API_KEY_HEADER: &str = "x-api-key";
