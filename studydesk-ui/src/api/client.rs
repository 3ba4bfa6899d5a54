//! HTTP Transport
//!
//! Delivers API requests with `gloo-net` and resolves the API base URL.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use studydesk::api::{ApiRequest, ApiResponse, Method, Transport, TransportError, DEFAULT_API_BASE};

/// Local storage key holding an API base override
const API_URL_KEY: &str = "studydesk_api_url";

/// Get the API base URL from local storage or use default.
///
/// Set `localStorage["studydesk_api_url"]` to point the app at another server.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    fn builder(request: &ApiRequest) -> RequestBuilder {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = Self::builder(&request);

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base(" https://api.example.com//"), "https://api.example.com");
    }
}
