use crate::api::service::TransferService;
use crate::core::config::TransmissionConfig;
use crate::core::error::RpcError;
use crate::models::transfer::Transfer;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

/// Header carrying Transmission's CSRF token
pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";

/// Fields requested from `torrent-get`
const TRANSFER_FIELDS: [&str; 4] = ["id", "name", "status", "trackerStats"];

/// Client for the Transmission JSON-RPC endpoint
pub struct TransmissionClient {
    client: reqwest::Client,
    url: String,
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    arguments: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: String,
    #[serde(default)]
    arguments: T,
}

#[derive(Debug, Default, Deserialize)]
struct SessionInfo {
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "rpc-version")]
    rpc_version: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct TransferList {
    #[serde(default)]
    torrents: Vec<Transfer>,
}

impl TransmissionClient {
    /// Build the HTTP client and negotiate a session with the daemon.
    ///
    /// Fails if the daemon is unreachable or refuses `session-get`.
    pub async fn connect(config: &TransmissionConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RpcError::ClientBuild)?;

        let mut this = Self {
            client,
            url: config.rpc_url(),
            session_id: None,
        };

        let session: SessionInfo = this
            .call("session-get", json!({ "fields": ["version", "rpc-version"] }))
            .await?;

        info!(
            url = %this.url,
            version = ?session.version,
            rpc_version = ?session.rpc_version,
            "Connected to Transmission"
        );

        Ok(this)
    }

    /// Send one RPC call, replaying it once if the daemon hands out a new session id
    async fn call<T>(&mut self, method: &str, arguments: Value) -> Result<T, RpcError>
    where
        T: DeserializeOwned + Default,
    {
        let request = RpcRequest { method, arguments };

        for _ in 0..2 {
            let mut builder = self.client.post(&self.url).json(&request);
            if let Some(session_id) = &self.session_id {
                builder = builder.header(SESSION_ID_HEADER, session_id);
            }

            let response = builder.send().await.map_err(|source| RpcError::Unreachable {
                url: self.url.clone(),
                source,
            })?;

            if response.status() == StatusCode::CONFLICT {
                let session_id = response
                    .headers()
                    .get(SESSION_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .ok_or(RpcError::MissingSessionId)?;

                debug!(method = method, "Transmission issued a new session id");
                self.session_id = Some(session_id.to_string());
                continue;
            }

            if !response.status().is_success() {
                return Err(RpcError::HttpStatus(response.status()));
            }

            let body = response
                .json::<RpcResponse<T>>()
                .await
                .map_err(RpcError::Decode)?;

            if body.result != "success" {
                return Err(RpcError::Rejected {
                    method: method.to_string(),
                    result: body.result,
                });
            }

            return Ok(body.arguments);
        }

        Err(RpcError::SessionRejected)
    }
}

impl TransferService for TransmissionClient {
    async fn list_transfers(&mut self) -> Result<Vec<Transfer>, RpcError> {
        let list: TransferList = self
            .call("torrent-get", json!({ "fields": TRANSFER_FIELDS }))
            .await?;

        debug!(transfers = list.torrents.len(), "Fetched transfer list");

        Ok(list.torrents)
    }

    async fn stop(&mut self, id: i64) -> Result<(), RpcError> {
        let _: Value = self.call("torrent-stop", json!({ "ids": [id] })).await?;
        Ok(())
    }
}
