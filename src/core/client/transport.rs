use crate::core::{ApiRequest, ApiResponse, FdError, HttpMethod};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// Sends one HTTP exchange and buffers the response.
///
/// This is the seam between the retrying executor and the wire. It must not retry on its
/// own; any failure to get a response is reported as an error and passed up untouched.
pub trait Transport: Send + Sync {
    fn send<'a>(
        &'a self,
        req: &'a ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, FdError>> + Send + 'a>>;
}

/// [`Transport`] over a `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        req: &'a ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, FdError>> + Send + 'a>> {
        Box::pin(async move {
            let builder = match req.method() {
                HttpMethod::Get => self.http.get(req.url().clone()),
                HttpMethod::Post => self.http.post(req.url().clone()),
            };
            let mut builder = builder.headers(req.headers().clone());
            if let Some(body) = req.body() {
                builder = builder.json(body);
            }

            let resp = builder.send().await?;
            let status = resp.status().as_u16();
            let url = resp.url().to_string();
            let body = resp.text().await?;
            Ok(ApiResponse::new(status, url, body))
        })
    }
}
