//! findata-rs: async client for the Financial Datasets API.
//!
//! Price history is fetched through [`get_prices`] / [`PricesBuilder`]. Every client owns
//! a [`PriceCache`] that is consulted before any request, and every request goes through
//! [`FdClient::execute`], which absorbs HTTP 429 responses with a bounded linear backoff
//! (60s, 90s, 120s, ... by default).
//!
//! ```no_run
//! # async fn run() -> Result<(), findata_rs::FdError> {
//! use chrono::NaiveDate;
//!
//! let client = findata_rs::FdClient::builder().build()?;
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! let prices = findata_rs::get_prices(&client, "AAPL", start, end).await?;
//! println!("{} bars", prices.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod line_items;
pub mod prices;

pub use crate::core::client::{
    API_KEY_ENV, Backoff, ReqwestTransport, RetryConfig, Sleeper, TokioSleeper, Transport,
};
pub use crate::core::{
    ApiRequest, ApiResponse, FdClient, FdClientBuilder, FdError, HttpMethod, LineItem,
    MemoryCache, Price, PriceCache,
};
pub use line_items::{LineItemSearch, Period, search_line_items};
pub use prices::{Interval, PricesBuilder, get_prices};
