use crate::core::Price;
use crate::core::wire::{de_timestamp, de_u64_from_any_number};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct PriceEnvelope {
    // Required even though unread: a 2xx body without it is an error payload.
    #[allow(dead_code)]
    pub(crate) ticker: String,
    pub(crate) prices: Vec<PriceNode>,
}

#[derive(Deserialize)]
pub(crate) struct PriceNode {
    #[serde(deserialize_with = "de_timestamp")]
    pub(crate) time: DateTime<Utc>,
    pub(crate) open: f64,
    pub(crate) close: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    #[serde(deserialize_with = "de_u64_from_any_number")]
    pub(crate) volume: u64,
}

impl From<PriceNode> for Price {
    fn from(n: PriceNode) -> Self {
        Price {
            time: n.time,
            open: n.open,
            close: n.close,
            high: n.high,
            low: n.low,
            volume: n.volume,
        }
    }
}
