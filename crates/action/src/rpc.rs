//! # Solana RPC クライアント
//!
//! recent blockhash の取得のみを行う。
//! JSON-RPC を reqwest で直接呼び出す。タイムアウトは明示せず、HTTPクライアントのデフォルトに従う。

use std::str::FromStr;

use serde::Deserialize;
use solana_sdk::hash::Hash;

use crate::error::ActionError;

/// recent blockhash の取得元。
#[async_trait::async_trait]
pub trait BlockhashSource: Send + Sync {
    /// 最新のblockhashを取得する。
    async fn latest_blockhash(&self) -> Result<Hash, ActionError>;
}

/// JSON-RPC `getLatestBlockhash` による実装。
pub struct JsonRpcBlockhashSource {
    http_client: reqwest::Client,
    rpc_url: String,
}

impl JsonRpcBlockhashSource {
    pub fn new(http_client: reqwest::Client, rpc_url: impl Into<String>) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct RpcContextValue<T> {
    value: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LatestBlockhash {
    blockhash: String,
    last_valid_block_height: u64,
}

#[async_trait::async_trait]
impl BlockhashSource for JsonRpcBlockhashSource {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        let rpc_request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getLatestBlockhash",
            "params": []
        });

        let rpc_response = self
            .http_client
            .post(&self.rpc_url)
            .json(&rpc_request)
            .send()
            .await
            .map_err(|e| ActionError::Rpc(format!("RPC send failed: {e}")))?;

        let status = rpc_response.status();
        if !status.is_success() {
            return Err(ActionError::Rpc(format!("RPC returned HTTP {status}")));
        }

        let rpc_body: RpcEnvelope<RpcContextValue<LatestBlockhash>> = rpc_response
            .json()
            .await
            .map_err(|e| ActionError::Rpc(format!("failed to parse RPC response: {e}")))?;

        if let Some(error) = rpc_body.error {
            return Err(ActionError::Rpc(format!("getLatestBlockhash failed: {error}")));
        }

        let latest = rpc_body
            .result
            .ok_or_else(|| ActionError::Rpc("RPC response has no result".to_string()))?
            .value;

        let blockhash = Hash::from_str(&latest.blockhash)
            .map_err(|e| ActionError::Rpc(format!("invalid blockhash {}: {e}", latest.blockhash)))?;

        tracing::debug!(
            %blockhash,
            last_valid_block_height = latest.last_valid_block_height,
            "recent blockhashを取得"
        );
        Ok(blockhash)
    }
}
