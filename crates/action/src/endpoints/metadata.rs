//! # GET|OPTIONS /api/actions/zex-airdrop
//!
//! アクション記述子を返す。OPTIONSもGETと同一の内容で応答し、
//! Blinkのプリフライトを成立させる。

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::Json;
use reqwest::Url;
use zex_types::ActionGetResponse;

use crate::config::ActionState;
use crate::error::ActionError;

/// アイコン画像のパス（リクエストのオリジン基準で解決する）
pub const ICON_PATH: &str = "/zeta.jpg";

const TITLE: &str = "Check Zeta Airdrop";
const DESCRIPTION: &str = "How many ZEX tokens you are eligible for?";
const LABEL: &str = "Check Eligible";

/// GET|OPTIONS /api/actions/zex-airdrop: アクション記述子。
pub async fn handle_metadata(
    State(state): State<Arc<ActionState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<ActionGetResponse>, ActionError> {
    let origin = match &state.public_base_url {
        Some(base) => base.clone(),
        None => request_origin(&uri, &headers)?,
    };

    let icon = origin
        .join(ICON_PATH)
        .map_err(|e| ActionError::BadRequest(format!("failed to build icon URL: {e}")))?;

    Ok(Json(ActionGetResponse {
        title: TITLE.to_string(),
        icon: icon.to_string(),
        description: DESCRIPTION.to_string(),
        label: LABEL.to_string(),
    }))
}

/// リクエストのオリジンを組み立てる。
///
/// absolute-formのURIならそのauthorityを、そうでなければ
/// `X-Forwarded-Host` → `Host` の順でホストを決める。
/// スキームは `X-Forwarded-Proto` → URIのスキーム → `http`。
pub(crate) fn request_origin(uri: &Uri, headers: &HeaderMap) -> Result<Url, ActionError> {
    let forwarded = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let host = uri
        .authority()
        .map(|a| a.to_string())
        .or_else(|| forwarded("x-forwarded-host"))
        .or_else(|| forwarded("host"))
        .ok_or_else(|| ActionError::BadRequest("request has no host".to_string()))?;

    let scheme = forwarded("x-forwarded-proto")
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    Url::parse(&format!("{scheme}://{host}"))
        .map_err(|e| ActionError::BadRequest(format!("invalid request URL: {e}")))
}
