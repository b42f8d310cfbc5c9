//! Asset-chain API client
//!
//! `AssetChainApi` is the seam between the diagnostic suite and the remote
//! read-only JSON service. `HttpAssetChainApi` is the production
//! implementation; tests substitute in-memory fixtures.
//!
//! Responses are returned as raw JSON. The service signals failure with an
//! `{error: ...}` body rather than HTTP status codes, so no status check is
//! performed here; the validator inspects the body.

use crate::types::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Errors raised while talking to the asset-chain API
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base address '{url}': {reason}")]
    InvalidBaseAddress { url: String, reason: String },

    #[error("failed to construct HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {endpoint} is not valid JSON: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// No response is available for this request. Raised by non-HTTP
    /// implementations, such as replay fixtures.
    #[error("no response available from {endpoint}: {reason}")]
    Unavailable {
        endpoint: &'static str,
        reason: String,
    },
}

/// Read-only access to the remote asset-chain API
#[async_trait]
pub trait AssetChainApi: Send + Sync {
    /// Issue one GET request and parse the JSON body.
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, ClientError>;
}

/// reqwest-backed client for a caller-supplied base address
#[derive(Debug, Clone)]
pub struct HttpAssetChainApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpAssetChainApi {
    /// Create a client for the API at `base`.
    ///
    /// Fails only on an invalid base address or client construction; this is
    /// the single setup error that propagates out of a diagnostic run.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base).map_err(|e| ClientError::InvalidBaseAddress {
            url: base.to_string(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("nft-doctor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self { client, base })
    }

    /// Full request URL for one descriptor.
    fn request_url(&self, request: &ApiRequest) -> Url {
        let mut url = self.base.clone();
        url.set_path(request.endpoint.path());
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("issuer", request.issuer);
            query.append_pair("mint_block_hash", request.mint_block_hash);
            if let Some(height) = request.height {
                query.append_pair("height", &height.to_string());
            }
        }
        url
    }
}

#[async_trait]
impl AssetChainApi for HttpAssetChainApi {
    async fn fetch(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let endpoint = request.endpoint.path();
        let url = self.request_url(request);
        debug!(%url, "fetching asset data");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Request { endpoint, source })?;

        response
            .json::<Value>()
            .await
            .map_err(|source| ClientError::Parse { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Endpoint;

    fn client() -> HttpAssetChainApi {
        HttpAssetChainApi::new("http://localhost:1919", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_address() {
        let result = HttpAssetChainApi::new("not a url", Duration::from_secs(5));
        assert!(matches!(
            result,
            Err(ClientError::InvalidBaseAddress { .. })
        ));
    }

    #[test]
    fn test_frontier_request_url() {
        let url = client().request_url(&ApiRequest {
            endpoint: Endpoint::AssetFrontier,
            issuer: "ban_1abc",
            mint_block_hash: "F61C",
            height: None,
        });
        assert_eq!(
            url.as_str(),
            "http://localhost:1919/get_asset_frontier?issuer=ban_1abc&mint_block_hash=F61C"
        );
    }

    #[test]
    fn test_at_height_request_url_includes_height() {
        let url = client().request_url(&ApiRequest {
            endpoint: Endpoint::AssetAtHeight,
            issuer: "ban_1abc",
            mint_block_hash: "68EB",
            height: Some(2),
        });
        assert_eq!(
            url.as_str(),
            "http://localhost:1919/get_asset_at_height?issuer=ban_1abc&mint_block_hash=68EB&height=2"
        );
    }

    #[test]
    fn test_request_url_replaces_base_path_and_query() {
        let api =
            HttpAssetChainApi::new("http://localhost:1919/old?stale=1", Duration::from_secs(5))
                .unwrap();
        let url = api.request_url(&ApiRequest {
            endpoint: Endpoint::AssetChain,
            issuer: "ban_1abc",
            mint_block_hash: "439F",
            height: None,
        });
        assert_eq!(
            url.as_str(),
            "http://localhost:1919/get_asset_chain?issuer=ban_1abc&mint_block_hash=439F"
        );
    }
}
