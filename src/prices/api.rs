use super::wire::PriceEnvelope;
use super::Interval;
use crate::core::client::RetryConfig;
use crate::core::{ApiRequest, FdClient, FdError, Price};
use chrono::NaiveDate;

pub(super) struct PriceQuery<'a> {
    pub ticker: &'a str,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub interval: Interval,
    pub interval_multiplier: u32,
}

pub(super) async fn fetch_prices(
    client: &FdClient,
    q: &PriceQuery<'_>,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Price>, FdError> {
    // A cached series wins over the requested range.
    if let Some(cached) = client.cache().get_prices(q.ticker) {
        #[cfg(feature = "tracing")]
        tracing::debug!(ticker = q.ticker, len = cached.len(), "price cache hit");
        return Ok(cached);
    }

    if q.start > q.end {
        return Err(FdError::InvalidDates);
    }
    if q.interval_multiplier == 0 {
        return Err(FdError::InvalidArgument(
            "interval_multiplier must be at least 1".into(),
        ));
    }

    let mut url = client.base_url().join("prices/")?;
    url.query_pairs_mut()
        .append_pair("ticker", q.ticker)
        .append_pair("interval", q.interval.as_str())
        .append_pair("interval_multiplier", &q.interval_multiplier.to_string())
        .append_pair("start_date", &q.start.to_string())
        .append_pair("end_date", &q.end.to_string());

    let req = ApiRequest::get(url).with_headers(client.auth_headers()?);
    let resp = client.execute(&req, retry_override).await?.error_for_status()?;

    let envelope: PriceEnvelope = resp.json()?;
    let prices: Vec<Price> = envelope.prices.into_iter().map(Price::from).collect();

    // Empty series are returned without touching the cache.
    if prices.is_empty() {
        return Ok(prices);
    }

    client.cache().set_prices(q.ticker, prices.clone());
    #[cfg(feature = "tracing")]
    tracing::debug!(ticker = q.ticker, len = prices.len(), "price cache populated");

    Ok(prices)
}
