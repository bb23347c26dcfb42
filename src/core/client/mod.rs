//! Public client surface + builder.
//! Internals are split into `retry` (policy + sleeper), `transport` (reqwest seam)
//! and `constants` (UA + defaults).

mod constants;
mod retry;
mod transport;

pub use constants::{API_KEY_ENV, API_KEY_HEADER};
pub use retry::{Backoff, RATE_LIMITED_STATUS, RetryConfig, Sleeper, TokioSleeper};
pub use transport::{ReqwestTransport, Transport};

use crate::core::{ApiRequest, ApiResponse, FdError, MemoryCache, PriceCache};
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Handle to the Financial Datasets API.
///
/// Cheap to clone: the transport, cache and sleeper are shared behind `Arc`s, so clones
/// see the same cached prices.
#[derive(Clone)]
pub struct FdClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    api_key: Option<String>,
    retry: RetryConfig,
    cache: Arc<dyn PriceCache>,
    sleeper: Arc<dyn Sleeper>,
}

impl FdClient {
    /// Create a new builder.
    pub fn builder() -> FdClientBuilder {
        FdClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn cache(&self) -> &dyn PriceCache {
        self.cache.as_ref()
    }

    /// The client-wide retry policy.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Resolves the API key: the builder value wins, otherwise the environment is read now.
    pub(crate) fn api_key(&self) -> Result<String, FdError> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(FdError::MissingApiKey(API_KEY_ENV))
    }

    pub(crate) fn auth_headers(&self) -> Result<HeaderMap, FdError> {
        let key = self.api_key()?;
        let mut value = HeaderValue::from_str(&key)
            .map_err(|e| FdError::InvalidHeader(format!("{API_KEY_HEADER}: {e}")))?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        Ok(headers)
    }

    /// Sends `req`, resending it while the server answers 429.
    ///
    /// Retry `k` is preceded by exactly one call to the sleeper with
    /// `backoff.delay_for(k)`. The loop ends on the first non-429 status or after
    /// `max_attempts()` sends; either way the last response is returned as-is, so a
    /// persistent 429 comes back as `Ok`. Transport errors end the loop immediately.
    ///
    /// `retry_override` replaces the client-wide policy for this call only.
    pub async fn execute(
        &self,
        req: &ApiRequest,
        retry_override: Option<&RetryConfig>,
    ) -> Result<ApiResponse, FdError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let max_attempts = cfg.max_attempts();
        let mut attempt: u32 = 1;

        loop {
            let resp = self.transport.send(req).await?;
            if resp.status() != RATE_LIMITED_STATUS || attempt >= max_attempts {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    method = req.method().as_str(),
                    url = %req.url(),
                    status = resp.status(),
                    attempts = attempt,
                    "request finished"
                );
                return Ok(resp);
            }

            let delay = cfg.backoff.delay_for(attempt);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                method = req.method().as_str(),
                url = %req.url(),
                retry = attempt,
                delay_secs = delay.as_secs_f64(),
                "rate limited, backing off"
            );
            self.sleeper.sleep(delay).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FdClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,

    transport: Option<Arc<dyn Transport>>,
    cache: Option<Arc<dyn PriceCache>>,
    sleeper: Option<Arc<dyn Sleeper>>,
}

impl FdClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://api.financialdatasets.ai/`).
    ///
    /// Resource paths are joined onto it; a missing trailing slash is added on `build()`.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use this API key instead of reading `FINANCIAL_DATASETS_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the whole retry policy.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Turn 429 retries on or off, keeping the rest of the policy.
    pub fn retry_enabled(mut self, yes: bool) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).enabled = yes;
        self
    }

    /// Change the retry bound, keeping the rest of the policy.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.retry.get_or_insert_with(RetryConfig::default).max_retries = n;
        self
    }

    /// Plug in a price cache. Default: a fresh [`MemoryCache`].
    pub fn cache(mut self, cache: Arc<dyn PriceCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Plug in the backoff sleeper. Default: [`TokioSleeper`].
    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = Some(sleeper);
        self
    }

    /// Plug in a custom transport. The UA and timeout settings only apply to the
    /// default reqwest transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<FdClient, FdError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                Arc::new(ReqwestTransport::new(httpb.build()?))
            }
        };

        Ok(FdClient {
            transport,
            base_url,
            api_key: self.api_key,
            retry: self.retry.unwrap_or_default(),
            cache: self
                .cache
                .unwrap_or_else(|| Arc::new(MemoryCache::new())),
            sleeper: self.sleeper.unwrap_or_else(|| Arc::new(TokioSleeper)),
        })
    }
}
