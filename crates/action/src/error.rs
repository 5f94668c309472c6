//! # アクションエラー型
//!
//! 全エンドポイントで共通のエラー型。
//! Blinkクライアントとの互換性のため、どのバリアントも 400 で応答する。
//! CORSヘッダはルーター層で全レスポンスに付与される。

use axum::http::StatusCode;

/// POST で `account` が欠落・不正な場合の固定メッセージ。
pub const INVALID_ACCOUNT_MESSAGE: &str = "Invalid \"account\" provided";

/// アクションエラー型。
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// `account` がBase58公開鍵としてパースできない
    #[error("{}", INVALID_ACCOUNT_MESSAGE)]
    InvalidAccount,
    /// 不正なリクエスト（ボディのパース失敗、URL構築失敗）
    #[error("{0}")]
    BadRequest(String),
    /// Solana RPC エラー（blockhash取得失敗、RPCエラーオブジェクト、レスポンス不正）
    #[error("Solana RPC error: {0}")]
    Rpc(String),
    /// 適格性APIエラー（通信失敗、タイムアウト、HTTPエラー、レスポンス不正）
    #[error("Eligibility API error: {0}")]
    Eligibility(String),
    /// トランザクションのシリアライズ失敗
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl axum::response::IntoResponse for ActionError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "アクションリクエストの処理に失敗");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
