use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/* ----- PRICES (shared by prices/ and cache) ----- */

/// One OHLCV observation for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
}

/* ----- LINE ITEMS (financials search) ----- */

/// A single search result from the financial line-item search.
///
/// Every requested line item (e.g. `revenue`, `free_cash_flow`) lands in `values`,
/// keyed by its API name. Values are kept as raw JSON since the API mixes numbers and nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub ticker: String,
    pub report_period: NaiveDate,
    pub period: String,
    pub currency: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl LineItem {
    /// Returns a requested line item as a number, if present and numeric.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(serde_json::Value::as_f64)
    }
}
