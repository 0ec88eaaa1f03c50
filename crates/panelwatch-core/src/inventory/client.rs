//! HTTP client for the panel application API.
//!
//! Builds one `reqwest::Client` per process with the credential and the
//! panel's vendor `Accept` header installed as default headers, so every
//! request carries them without the call sites repeating them.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::InventoryError;
use super::traits::InventoryService;
use super::types::{
    Node, ServerDetail, ServerSummary, WireList, WireNode, WireObject, WireServerDetail,
    WireServerSummary,
};
use crate::config::PanelConfig;

/// Vendor media type the panel's application API expects.
pub const PANEL_ACCEPT: &str = "Application/vnd.pterodactyl.v1+json";

pub const NODES_PATH: &str = "/api/application/nodes";
pub const SERVERS_PATH: &str = "/api/application/servers";

/// Panel inventory over HTTP.
#[derive(Debug, Clone)]
pub struct HttpInventoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryClient {
    /// Build a client from resolved configuration.
    pub fn from_config(config: &PanelConfig) -> Result<Self, InventoryError> {
        let base_url = config
            .base_url()
            .map_err(|e| InventoryError::ClientBuild {
                message: e.to_string(),
            })?;
        let api_key = config.api_key().map_err(|e| InventoryError::ClientBuild {
            message: e.to_string(),
        })?;

        Self::new(base_url, api_key, config.panel.request_timeout())
    }

    /// Build a client for `base_url` authenticating with `api_key`.
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: std::time::Duration,
    ) -> Result<Self, InventoryError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| InventoryError::InvalidCredential)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(PANEL_ACCEPT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| InventoryError::ClientBuild {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, InventoryError> {
        let url = format!("{}{}", self.base_url, path);

        debug!(event = "core.inventory.request_started", endpoint = path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Request {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(InventoryError::status(path, status.as_u16(), &body));
        }

        let bytes = resp.bytes().await.map_err(|e| InventoryError::Request {
            endpoint: path.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| InventoryError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl InventoryService for HttpInventoryClient {
    async fn list_nodes(&self) -> Result<Vec<Node>, InventoryError> {
        let list: WireList<WireNode> = self.get_json(NODES_PATH).await?;
        Ok(list.data.into_iter().map(|o| o.attributes.into()).collect())
    }

    async fn list_servers(&self) -> Result<Vec<ServerSummary>, InventoryError> {
        let list: WireList<WireServerSummary> = self.get_json(SERVERS_PATH).await?;
        Ok(list.data.into_iter().map(|o| o.attributes.into()).collect())
    }

    async fn get_server_detail(&self, id: u64) -> Result<ServerDetail, InventoryError> {
        let path = format!("{}/{}", SERVERS_PATH, id);
        let detail: WireObject<WireServerDetail> = self.get_json(&path).await?;
        Ok(detail.attributes.into())
    }
}
