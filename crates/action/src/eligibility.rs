//! # Zeta エアドロップ適格性API
//!
//! `GetAirdropFinalFrontend` GraphQLクエリでウォレットの適格性レコードを取得し、
//! ウォレットに表示するメッセージを組み立てる。

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use solana_sdk::pubkey::Pubkey;
use zex_types::{
    AirdropAllocation, AirdropQueryData, AirdropQueryVariables, GraphQlRequest, GraphQlResponse,
    GET_AIRDROP_FINAL_FRONTEND_QUERY,
};

use crate::error::ActionError;

/// 適格性APIのリクエストタイムアウト（2分）
pub const ELIGIBILITY_TIMEOUT: Duration = Duration::from_secs(2 * 60);

/// APIが要求するフロントエンドのオリジン
const ZETA_FRONTEND_ORIGIN: &str = "https://token.zeta.markets";
const AMZ_USER_AGENT: &str = "aws-amplify/6.3.6 api/1 framework/1";

/// エアドロップ適格性の照会先。
#[async_trait::async_trait]
pub trait EligibilityApi: Send + Sync {
    /// ウォレットの適格性レコードを取得する。
    /// APIがレコードを返さない場合（未登録、GraphQLエラー）は `Ok(None)`。
    async fn fetch_allocation(
        &self,
        authority: &Pubkey,
    ) -> Result<Option<AirdropAllocation>, ActionError>;
}

/// Zeta GraphQL API クライアント。
pub struct ZetaAirdropClient {
    http_client: reqwest::Client,
    graphql_url: String,
}

impl ZetaAirdropClient {
    /// ベースURLとAPIキーから構築する。
    /// ヘッダとタイムアウトはクライアント単位で固定する。
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("origin"),
            HeaderValue::from_static(ZETA_FRONTEND_ORIGIN),
        );
        headers.insert(
            HeaderName::from_static("referer"),
            HeaderValue::from_static(ZETA_FRONTEND_ORIGIN),
        );
        headers.insert(
            HeaderName::from_static("x-amz-user-agent"),
            HeaderValue::from_static(AMZ_USER_AGENT),
        );
        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| anyhow::anyhow!("ZETA_API_KEYがヘッダ値として不正です: {e}"))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            graphql_url: format!("{}/graphql", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait::async_trait]
impl EligibilityApi for ZetaAirdropClient {
    async fn fetch_allocation(
        &self,
        authority: &Pubkey,
    ) -> Result<Option<AirdropAllocation>, ActionError> {
        let request = GraphQlRequest {
            query: GET_AIRDROP_FINAL_FRONTEND_QUERY.to_string(),
            variables: AirdropQueryVariables {
                authority: authority.to_string(),
            },
        };

        let response = self
            .http_client
            .post(&self.graphql_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ActionError::Eligibility(format!("request timed out: {e}"))
                } else {
                    ActionError::Eligibility(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ActionError::Eligibility(format!(
                "API returned HTTP {status}: {body}"
            )));
        }

        let body: GraphQlResponse<AirdropQueryData> = response
            .json()
            .await
            .map_err(|e| ActionError::Eligibility(format!("failed to parse response: {e}")))?;

        if let Some(errors) = body.errors.as_ref().filter(|errors| !errors.is_empty()) {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            tracing::warn!(%authority, errors = ?messages, "GraphQLエラーが返されました");
        }

        Ok(body.data.and_then(|data| data.get_airdrop_final_frontend))
    }
}

// ---------------------------------------------------------------------------
// メッセージ組み立て
// ---------------------------------------------------------------------------

/// 適格性レコードからウォレットに表示するメッセージを組み立てる。
pub fn eligibility_message(allocation: Option<&AirdropAllocation>) -> String {
    match allocation {
        Some(record) if record.is_eligible() => format!(
            "Account is eligible to claim {} ZEX",
            format_allocation(&record.total_allocation)
        ),
        _ => "Account is not eligible for ZEX airdrop".to_string(),
    }
}

/// 割当量を表示用文字列にする。
/// 整数値は小数点なし、小数値は最短の10進表現、文字列はそのまま。欠落・null は "0"。
fn format_allocation(amount: &serde_json::Value) -> String {
    match amount {
        serde_json::Value::Null => "0".to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => format_number(n),
        other => other.to_string(),
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        Some(v) => v.to_string(),
        None => n.to_string(),
    }
}
