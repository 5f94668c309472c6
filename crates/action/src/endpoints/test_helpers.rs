//! # エンドポイントテスト用共通ヘルパー
//!
//! モックのblockhash取得元・適格性APIと、モックHTTPサーバー群。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use zex_types::AirdropAllocation;

use crate::config::ActionState;
use crate::eligibility::EligibilityApi;
use crate::error::ActionError;
use crate::rpc::BlockhashSource;

/// テスト用の手数料送金先
pub fn test_destination() -> Pubkey {
    Pubkey::new_from_array([7u8; 32])
}

/// 固定blockhashを返す（または失敗する）モック。呼び出し回数を記録する。
pub struct MockBlockhashSource {
    pub blockhash: Option<Hash>,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl BlockhashSource for MockBlockhashSource {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.blockhash
            .ok_or_else(|| ActionError::Rpc("mock RPC unavailable".to_string()))
    }
}

/// 固定の適格性レコードを返す（または失敗する）モック。呼び出し回数を記録する。
pub struct MockEligibilityApi {
    pub result: Result<Option<AirdropAllocation>, String>,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl EligibilityApi for MockEligibilityApi {
    async fn fetch_allocation(
        &self,
        _authority: &Pubkey,
    ) -> Result<Option<AirdropAllocation>, ActionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(ActionError::Eligibility)
    }
}

/// モックの構成と呼び出しカウンタ。
pub struct MockSetup {
    pub blockhash: Option<Hash>,
    pub allocation: Result<Option<AirdropAllocation>, String>,
    pub rpc_calls: Arc<AtomicUsize>,
    pub eligibility_calls: Arc<AtomicUsize>,
}

impl MockSetup {
    /// blockhash取得成功 + 指定の適格性レコード
    pub fn with_allocation(allocation: Option<AirdropAllocation>) -> Self {
        Self {
            blockhash: Some(Hash::new_unique()),
            allocation: Ok(allocation),
            rpc_calls: Arc::new(AtomicUsize::new(0)),
            eligibility_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn state(&self) -> Arc<ActionState> {
        Arc::new(ActionState {
            fee_destination: test_destination(),
            public_base_url: None,
            blockhash_source: Box::new(MockBlockhashSource {
                blockhash: self.blockhash,
                calls: self.rpc_calls.clone(),
            }),
            eligibility_api: Box::new(MockEligibilityApi {
                result: self.allocation.clone(),
                calls: self.eligibility_calls.clone(),
            }),
        })
    }

    pub fn outbound_calls(&self) -> usize {
        self.rpc_calls.load(Ordering::SeqCst) + self.eligibility_calls.load(Ordering::SeqCst)
    }
}

/// 適格性レコードを構築する
pub fn allocation(eligibility: &str, total: serde_json::Value) -> AirdropAllocation {
    serde_json::from_value(serde_json::json!({
        "eligibility": eligibility,
        "total_allocation": total,
    }))
    .unwrap()
}

/// 外部通信を伴わないテスト用ActionState（所有権付き）
pub fn test_state_parts() -> ActionState {
    ActionState {
        fee_destination: test_destination(),
        public_base_url: None,
        blockhash_source: Box::new(MockBlockhashSource {
            blockhash: Some(Hash::new_unique()),
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        eligibility_api: Box::new(MockEligibilityApi {
            result: Ok(None),
            calls: Arc::new(AtomicUsize::new(0)),
        }),
    }
}

/// 外部通信を伴わないテスト用ActionState
pub fn test_state() -> Arc<ActionState> {
    Arc::new(test_state_parts())
}

/// テスト用モックHTTPサーバーを起動し、指定パスへのGET/POSTに固定JSONを返す。
pub async fn start_mock_json_server(path: &str, body: serde_json::Value) -> u16 {
    use axum::routing::any;

    let app = axum::Router::new().route(
        path,
        any(move || {
            let b = body.clone();
            async move { axum::Json(b) }
        }),
    );

    start_mock_router(app).await
}

/// 任意のルーターをランダムポートで起動し、ポート番号を返す。
pub async fn start_mock_router(app: axum::Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    port
}

/// アクションサーバー本体をランダムポートで起動する。
pub async fn start_action_server(state: Arc<ActionState>) -> u16 {
    start_mock_router(crate::endpoints::router(state)).await
}
