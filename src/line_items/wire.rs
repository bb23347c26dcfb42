use crate::core::LineItem;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct SearchBody<'a> {
    pub(crate) tickers: &'a [String],
    pub(crate) line_items: &'a [String],
    pub(crate) end_date: String,
    pub(crate) period: &'static str,
    pub(crate) limit: usize,
}

#[derive(Deserialize)]
pub(crate) struct SearchEnvelope {
    pub(crate) search_results: Vec<LineItem>,
}
