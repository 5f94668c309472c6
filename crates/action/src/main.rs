//! # ZEX Airdrop Check Action
//!
//! ウォレットがZEXエアドロップの適格性を確認し、
//! 署名用の未署名トランザクションを受け取るための Solana Action サーバー。
//!
//! ## API エンドポイント
//! - `GET|OPTIONS /api/actions/zex-airdrop`: アクション記述子
//! - `POST /api/actions/zex-airdrop`: 適格性チェック + 手数料トランザクション
//! - `GET|OPTIONS /actions.json`: Actionsルール
//!
//! ## 環境変数
//! - `SOLANA_RPC`: blockhash取得用RPC（デフォルト: mainnet-beta）
//! - `ZETA_API_BASE_URL` / `ZETA_API_KEY`: 適格性API
//! - `FEE_DESTINATION`: チェック手数料の送金先（必須）
//! - `PUBLIC_BASE_URL`: アイコンURLの基準オリジン
//! - `BIND_ADDR`: 待ち受けアドレス

mod blockchain;
mod config;
mod cors;
mod eligibility;
mod endpoints;
mod error;
mod rpc;

use std::sync::Arc;

use config::{ActionConfig, ActionState};
use eligibility::{ZetaAirdropClient, ELIGIBILITY_TIMEOUT};
use rpc::JsonRpcBlockhashSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ActionConfig::from_env()?;
    tracing::info!(
        solana_rpc = %config.solana_rpc_url,
        zeta_api = %config.zeta_api_base_url,
        fee_destination = %config.fee_destination,
        "設定を読み込みました"
    );
    if config.zeta_api_key.is_none() {
        tracing::warn!("ZETA_API_KEYが未設定です。x-api-keyヘッダなしで照会します");
    }

    // RPC呼び出しはタイムアウトを明示しない
    let blockhash_source =
        JsonRpcBlockhashSource::new(reqwest::Client::new(), config.solana_rpc_url.clone());
    let eligibility_api = ZetaAirdropClient::new(
        &config.zeta_api_base_url,
        config.zeta_api_key.as_deref(),
        ELIGIBILITY_TIMEOUT,
    )?;

    let state = Arc::new(ActionState {
        fee_destination: config.fee_destination,
        public_base_url: config.public_base_url.clone(),
        blockhash_source: Box::new(blockhash_source),
        eligibility_api: Box::new(eligibility_api),
    });

    let app = endpoints::router(state);

    tracing::info!("アクションサーバーを {} で起動します", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
