//! BlockCypher API handle and shared HTTP transport.
//!
//! Every resource wrapper funnels through the helpers here: encode the
//! optional JSON body, issue the request under the token/coin/chain
//! scope, check the status, decode the JSON response. Encode, transport,
//! and decode failures stay distinguishable in the returned error.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::BlockCypherError;
use crate::types::BlockCypherConfig;

pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// HTTP client for the BlockCypher API.
///
/// Holds only the immutable configuration and a connection pool; it is
/// cheap to clone and safe to share across concurrently running tasks.
/// Calls are issued one request per operation, with no retries, local
/// caching, or ordering guarantees between concurrent calls against the
/// same remote resource.
#[derive(Debug, Clone)]
pub struct BlockCypherClient {
    /// Client configuration.
    config: BlockCypherConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl BlockCypherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BlockCypherConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &BlockCypherConfig {
        &self.config
    }

    /// Build a full endpoint URL under the coin/chain scope.
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.config.base_url, self.config.coin, self.config.chain, path
        )
    }

    /// Issue a request and return the raw response body.
    ///
    /// The token is appended to the query on every request. 404 maps to
    /// [`BlockCypherError::NotFound`]; any other non-2xx status maps to
    /// [`BlockCypherError::Server`] with the body preserved.
    async fn send(
        &self,
        method: Method,
        url: &str,
        mut query: QueryPairs,
        body: Option<Vec<u8>>,
    ) -> Result<String, BlockCypherError> {
        if let Some(ref token) = self.config.token {
            query.push(("token", token.clone()));
        }

        debug!(method = %method, url, "api request");

        let mut builder = self.client.request(method, url).query(&query);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(BlockCypherError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BlockCypherError::Server {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        debug!(status = status.as_u16(), body_len = text.len(), "api response");
        Ok(text)
    }

    /// GET a path and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryPairs,
    ) -> Result<T, BlockCypherError> {
        let text = self.send(Method::GET, &self.endpoint(path), query, None).await?;
        serde_json::from_str(&text).map_err(BlockCypherError::Decode)
    }

    /// GET an absolute URL the service handed back (a continuation link)
    /// and decode the JSON response.
    pub(crate) async fn get_url<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, BlockCypherError> {
        let text = self.send(Method::GET, url, Vec::new(), None).await?;
        serde_json::from_str(&text).map_err(BlockCypherError::Decode)
    }

    /// POST a JSON body to a path and decode the JSON response.
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryPairs,
        body: &B,
    ) -> Result<T, BlockCypherError> {
        let body = serde_json::to_vec(body).map_err(BlockCypherError::Encode)?;
        let text = self
            .send(Method::POST, &self.endpoint(path), query, Some(body))
            .await?;
        serde_json::from_str(&text).map_err(BlockCypherError::Decode)
    }

    /// POST with no request body and decode the JSON response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: QueryPairs,
    ) -> Result<T, BlockCypherError> {
        let text = self
            .send(Method::POST, &self.endpoint(path), query, None)
            .await?;
        serde_json::from_str(&text).map_err(BlockCypherError::Decode)
    }

    /// DELETE a path; no response body is expected.
    pub(crate) async fn delete(
        &self,
        path: &str,
        query: QueryPairs,
    ) -> Result<(), BlockCypherError> {
        self.send(Method::DELETE, &self.endpoint(path), query, None)
            .await?;
        Ok(())
    }
}
