use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

use super::error::FetchError;
use super::model::{decode_assets, Asset};
use crate::config::ApiConfig;

const USER_AGENT: &str = concat!("coinboard/", env!("CARGO_PKG_VERSION"));

/// Something that can produce the current asset list.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Where the assets come from, for logging.
    fn endpoint(&self) -> &str;

    /// Fetch the full asset list once.
    async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError>;
}

/// Fetches assets with a plain `GET` against a CoinCap-style endpoint.
pub struct HttpAssetSource {
    client: Client,
    endpoint: String,
}

impl HttpAssetSource {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
        })
    }

    fn transport_error(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        decode_assets(&body)
    }
}
