//! # アクションエンドポイント
//!
//! - `GET|OPTIONS /api/actions/zex-airdrop`: アクション記述子
//! - `POST /api/actions/zex-airdrop`: 適格性チェック + 手数料トランザクション
//! - `GET|OPTIONS /actions.json`: Actionsルール

pub mod actions_json;
pub mod check;
pub mod metadata;

#[cfg(test)]
pub(crate) mod test_helpers;


use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::config::ActionState;
use crate::cors::apply_actions_cors_headers;

pub use actions_json::handle_actions_json;
pub use check::handle_check;
pub use metadata::handle_metadata;

/// アクションのパス
pub const ACTION_PATH: &str = "/api/actions/zex-airdrop";

/// ルーターを構築する。CORSヘッダは404/405を含む全レスポンスに付与される。
pub fn router(state: Arc<ActionState>) -> Router {
    Router::new()
        .route(
            ACTION_PATH,
            get(handle_metadata)
                .options(handle_metadata)
                .post(handle_check),
        )
        .route(
            "/actions.json",
            get(handle_actions_json).options(handle_actions_json),
        )
        .fallback(handle_not_found)
        .layer(axum::middleware::map_response(apply_actions_cors_headers))
        .with_state(state)
}

async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
