//! Historical prices for a single ticker.
//!
//! Results are served from the client's [`PriceCache`](crate::PriceCache) when present;
//! otherwise the `prices/` endpoint is called (with 429 retries) and the answer is cached
//! under the ticker.

mod api;
mod wire;

use crate::core::client::RetryConfig;
use crate::core::{FdClient, FdError, Price};
use api::{PriceQuery, fetch_prices};
use chrono::NaiveDate;

/// Bar size of a price series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    Second,
    Minute,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Interval {
    /// The value used in the `interval` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Second => "second",
            Interval::Minute => "minute",
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

/// A builder for fetching the price history of one ticker.
///
/// The cache is keyed by ticker alone: a cached series is returned for any date range
/// or interval.
#[derive(Clone)]
pub struct PricesBuilder {
    client: FdClient,
    ticker: String,
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
    interval_multiplier: u32,
    retry_override: Option<RetryConfig>,
}

impl PricesBuilder {
    /// Creates a builder for daily bars of `ticker` between `start` and `end` (inclusive).
    pub fn new(
        client: &FdClient,
        ticker: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            start,
            end,
            interval: Interval::Day,
            interval_multiplier: 1,
            retry_override: None,
        }
    }

    /// Sets the bar size. (Default: `Interval::Day`)
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets how many `interval`s make up one bar. (Default: `1`)
    pub fn interval_multiplier(mut self, n: u32) -> Self {
        self.interval_multiplier = n;
        self
    }

    /// Overrides the client's retry policy for this call.
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Returns the price series, from cache if present, otherwise from the API.
    ///
    /// # Errors
    /// - [`FdError::RequestFailed`] when the final response is not 2xx (including a 429
    ///   that outlived every retry). The cache is left untouched.
    /// - [`FdError::MissingApiKey`] before any request if no key is configured.
    /// - [`FdError::Http`] for transport failures, which are not retried.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(ticker = %self.ticker)))]
    pub async fn fetch(self) -> Result<Vec<Price>, FdError> {
        let query = PriceQuery {
            ticker: &self.ticker,
            start: self.start,
            end: self.end,
            interval: self.interval,
            interval_multiplier: self.interval_multiplier,
        };
        fetch_prices(&self.client, &query, self.retry_override.as_ref()).await
    }
}

/// Daily prices for `ticker` between `start` and `end`, using the client's defaults.
pub async fn get_prices(
    client: &FdClient,
    ticker: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Price>, FdError> {
    PricesBuilder::new(client, ticker, start, end).fetch().await
}
