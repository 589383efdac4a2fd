//! HTTP Transport
//!
//! Browser `fetch` through gloo-net. The session cookie rides along on every
//! request; no token is attached by hand.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use pinboard_core::{decode_body, ApiError, ApiRequest, ApiResult, ClientConfig, Method, Transport};
use serde_json::Value;
use web_sys::RequestCredentials;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = self.config.api_url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        builder.credentials(RequestCredentials::Include)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let builder = self.builder(&request);
        let pending = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = pending.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            log::debug!("{} {} -> HTTP {}", request.method.as_str(), request.path, status);
            return Err(ApiError::from_response(status, &text));
        }
        decode_body(&text)
    }
}
