//! POST ハンドラ実装

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use solana_sdk::pubkey::Pubkey;
use zex_types::{ActionPostRequest, ActionPostResponse};

use crate::blockchain::fee_tx::{build_check_fee_tx, encode_transaction};
use crate::config::ActionState;
use crate::eligibility::eligibility_message;
use crate::error::ActionError;

/// POST /api/actions/zex-airdrop: 適格性チェック。
///
/// ボディは `Json` エクストラクタを使わずに受け取り、
/// パース失敗もアクションエラーとして400で返す。
pub async fn handle_check(
    State(state): State<Arc<ActionState>>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionError> {
    let request: ActionPostRequest = serde_json::from_slice(&body)
        .map_err(|e| ActionError::BadRequest(format!("invalid request body: {e}")))?;

    let account = parse_account(request.account_str())?;

    let blockhash = state.blockhash_source.latest_blockhash().await?;
    let transaction = build_check_fee_tx(&account, &state.fee_destination, &blockhash);

    let allocation = state.eligibility_api.fetch_allocation(&account).await?;
    let message = eligibility_message(allocation.as_ref());

    let transaction = encode_transaction(&transaction)?;

    tracing::info!(%account, %message, "適格性チェック完了");

    Ok(Json(ActionPostResponse {
        transaction,
        message: Some(message),
    }))
}

/// `account` をBase58公開鍵としてパースする。欠落・文字列以外も不正として扱う。
pub(crate) fn parse_account(account: Option<&str>) -> Result<Pubkey, ActionError> {
    account
        .and_then(|s| Pubkey::from_str(s).ok())
        .ok_or(ActionError::InvalidAccount)
}
