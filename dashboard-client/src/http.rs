//! HTTP client for the dashboard service

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// Query string parameters, ordered so identical requests build identical URLs
pub type Params = BTreeMap<String, String>;

/// Raw HTTP transport
///
/// Returns the body of a 2xx response; any other status is turned into
/// [`ClientError::Http`]. Decoding is left to [`DataClient`].
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `path` with the given query parameters
    async fn get_raw(&self, path: &str, params: &Params) -> ClientResult<Vec<u8>>;

    /// Send a request with an optional JSON body
    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Vec<u8>>;

    /// Base URL requests are resolved against
    fn base_url(&self) -> &str;
}

// ============================================================================
// NetworkHttpClient
// ============================================================================

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get_raw(&self, path: &str, params: &Params) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(url = %url, ?params, "GET");

        let mut req = self.client.get(&url).query(params);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = req.send().await.inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed");
        })?;
        Self::handle_response(response).await
    }

    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(url = %url, method = %method, "Sending request");

        let mut req = self.client.request(method, &url);
        if let Some(body) = body {
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = req.send().await.inspect_err(|e| {
            tracing::warn!(url = %url, error = %e, "Request failed");
        })?;
        Self::handle_response(response).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ============================================================================
// DataClient
// ============================================================================

/// Typed JSON access on top of any [`HttpClient`]
#[derive(Clone)]
pub struct DataClient {
    http: Arc<dyn HttpClient>,
}

impl DataClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Build a network-backed client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(NetworkHttpClient::new(config)?)))
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// GET and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> ClientResult<T> {
        let body = self.http.get_raw(path, params).await?;
        decode(path, &body)
    }

    /// Send `body` as JSON, ignoring any answer body
    pub async fn send_no_content<B>(&self, method: Method, path: &str, body: &B) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(ClientError::Encode)?;
        self.http.send_raw(method, path, Some(payload)).await?;
        Ok(())
    }
}

impl std::fmt::Debug for DataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(path = %path, error = %e, "Failed to decode response body");
        ClientError::Decode(e)
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::sync::Mutex;

    /// In-memory transport answering every request with a canned result
    pub(crate) struct CannedHttp {
        pub answer: Mutex<Option<ClientResult<Vec<u8>>>>,
        pub seen: Mutex<Vec<(String, Params)>>,
    }

    impl CannedHttp {
        pub fn body(body: &str) -> Arc<Self> {
            Arc::new(Self {
                answer: Mutex::new(Some(Ok(body.as_bytes().to_vec()))),
                seen: Mutex::new(Vec::new()),
            })
        }

        pub fn error(err: ClientError) -> Arc<Self> {
            Arc::new(Self {
                answer: Mutex::new(Some(Err(err))),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn take(&self) -> ClientResult<Vec<u8>> {
            self.answer
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(ClientError::Fetch("no canned answer left".into())))
        }
    }

    #[async_trait]
    impl HttpClient for CannedHttp {
        async fn get_raw(&self, path: &str, params: &Params) -> ClientResult<Vec<u8>> {
            self.seen
                .lock()
                .unwrap()
                .push((path.to_string(), params.clone()));
            self.take()
        }

        async fn send_raw(
            &self,
            method: Method,
            path: &str,
            body: Option<Vec<u8>>,
        ) -> ClientResult<Vec<u8>> {
            let mut params = Params::new();
            params.insert("method".into(), method.to_string());
            if let Some(body) = body {
                params.insert("body".into(), String::from_utf8_lossy(&body).into_owned());
            }
            self.seen.lock().unwrap().push((path.to_string(), params));
            self.take()
        }

        fn base_url(&self) -> &str {
            "memory://"
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = NetworkHttpClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_url_join_trims_slashes() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(client.url("/api/analytics/order-stats"), "http://localhost:9000/api/analytics/order-stats");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_data_client_decodes() {
        let http = CannedHttp::body(r#"{"total_orders": 3}"#);
        let client = DataClient::new(http.clone());
        let value: serde_json::Value = client.get("order-stats", &Params::new()).await.unwrap();
        assert_eq!(value["total_orders"], 3);
        assert_eq!(http.seen.lock().unwrap()[0].0, "order-stats");
    }

    #[tokio::test]
    async fn test_data_client_decode_error() {
        let client = DataClient::new(CannedHttp::body("<html>oops</html>"));
        let err = client
            .get::<serde_json::Value>("order-stats", &Params::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_data_client_passes_transport_errors_through() {
        let client = DataClient::new(CannedHttp::error(ClientError::Http {
            status: 500,
            body: "boom".into(),
        }));
        let err = client
            .get::<serde_json::Value>("order-stats", &Params::new())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn test_encode_failure_is_not_a_decode_error() {
        let http = CannedHttp::body("");
        let client = DataClient::new(http.clone());
        let err = client
            .send_no_content(Method::POST, "api/roles", &Unserializable)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Encode(_)), "got {err:?}");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert!(http.seen.lock().unwrap().is_empty());
    }
}
