//! Financial statement line items (`financials/search/line-items`).
//!
//! This is the API's POST endpoint; the JSON body is resent unchanged on every
//! rate-limit retry. Results are not cached.

use crate::core::client::RetryConfig;
use crate::core::{ApiRequest, FdClient, FdError, LineItem};
use chrono::NaiveDate;
use wire::{SearchBody, SearchEnvelope};

mod wire;

/// Reporting period of the statements searched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    /// Trailing twelve months.
    #[default]
    Ttm,
    Annual,
    Quarterly,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Ttm => "ttm",
            Period::Annual => "annual",
            Period::Quarterly => "quarterly",
        }
    }
}

/// A builder for a line-item search.
#[derive(Clone)]
pub struct LineItemSearch {
    client: FdClient,
    tickers: Vec<String>,
    line_items: Vec<String>,
    end_date: NaiveDate,
    period: Period,
    limit: usize,
    retry_override: Option<RetryConfig>,
}

impl LineItemSearch {
    /// Searches reports for `ticker` up to `end_date`. Defaults: `Period::Ttm`, limit 10.
    pub fn new(client: &FdClient, ticker: impl Into<String>, end_date: NaiveDate) -> Self {
        Self {
            client: client.clone(),
            tickers: vec![ticker.into()],
            line_items: Vec::new(),
            end_date,
            period: Period::Ttm,
            limit: 10,
            retry_override: None,
        }
    }

    /// Adds more tickers to the same search. Tickers already present are skipped.
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for t in tickers {
            let t = t.into();
            if !self.tickers.contains(&t) {
                self.tickers.push(t);
            }
        }
        self
    }

    /// Adds line items to request (e.g. `revenue`, `net_income`).
    pub fn line_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_items.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Caps the number of results returned. (Default: `10`)
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Overrides the client's retry policy for this call.
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Runs the search.
    ///
    /// # Errors
    /// Returns [`FdError::InvalidArgument`] when no line items were requested or the
    /// limit is zero, and [`FdError::RequestFailed`] on a non-2xx final response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(tickers = ?self.tickers)))]
    pub async fn fetch(self) -> Result<Vec<LineItem>, FdError> {
        if self.line_items.is_empty() {
            return Err(FdError::InvalidArgument("no line items requested".into()));
        }
        if self.limit == 0 {
            return Err(FdError::InvalidArgument("limit must be at least 1".into()));
        }

        let url = self.client.base_url().join("financials/search/line-items")?;
        let body = SearchBody {
            tickers: &self.tickers,
            line_items: &self.line_items,
            end_date: self.end_date.to_string(),
            period: self.period.as_str(),
            limit: self.limit,
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| FdError::Data(format!("json encode error: {e}")))?;

        let req = ApiRequest::post(url, body).with_headers(self.client.auth_headers()?);
        let resp = self
            .client
            .execute(&req, self.retry_override.as_ref())
            .await?
            .error_for_status()?;

        let envelope: SearchEnvelope = resp.json()?;
        let mut results = envelope.search_results;
        results.truncate(self.limit);
        Ok(results)
    }
}

/// Searches `line_items` for `ticker` with the default period and limit.
pub async fn search_line_items<I, S>(
    client: &FdClient,
    ticker: &str,
    line_items: I,
    end_date: NaiveDate,
) -> Result<Vec<LineItem>, FdError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    LineItemSearch::new(client, ticker, end_date)
        .line_items(line_items)
        .fetch()
        .await
}
