use crate::core::FdError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP methods the API is called with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully described logical request.
///
/// The retrying executor resends the same value on every attempt, so method, URL,
/// headers and body are identical across retries. Only POST requests carry a body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    method: HttpMethod,
    url: Url,
    headers: HeaderMap,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// A GET request without headers.
    pub fn get(url: Url) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// A POST request sending `body` as JSON.
    pub fn post(url: Url, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url,
            headers: HeaderMap::new(),
            body: Some(body),
        }
    }

    /// Adds a single header, failing if the name or value is not valid HTTP.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, FdError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| FdError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| FdError::InvalidHeader(format!("{}: {e}", name.as_str())))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Merges `headers` into the request, replacing existing values of the same name.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}

/// The buffered outcome of one HTTP exchange: status, final URL and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    url: String,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FdError> {
        serde_json::from_str(&self.body)
            .map_err(|e| FdError::Data(format!("json parse error: {e}")))
    }

    /// Turns a non-2xx response into [`FdError::RequestFailed`].
    pub fn error_for_status(self) -> Result<Self, FdError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FdError::RequestFailed {
                status: self.status,
                url: self.url,
                body: self.body,
            })
        }
    }
}
