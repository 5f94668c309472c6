//! # Actions CORSヘッダ
//!
//! Blinkクライアントは任意のオリジンからアクションを呼び出すため、
//! 成功・失敗を問わず全レスポンスに固定のCORSヘッダを付与する。
//! プリフライトはOPTIONSハンドラがGETと同じ内容で応答する。

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;

/// Solana Actions のCORSヘッダ一式。
pub fn actions_cors_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*")),
        (
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,PUT,OPTIONS"),
        ),
        (
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(
                "Content-Type, Authorization, Content-Encoding, Accept-Encoding",
            ),
        ),
        (CONTENT_TYPE, HeaderValue::from_static("application/json")),
    ]
}

/// レスポンスにCORSヘッダを上書きで付与する。
/// `axum::middleware::map_response` としてルーター全体に適用する。
pub async fn apply_actions_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in actions_cors_headers() {
        headers.insert(name, value);
    }
    response
}
