//! # ZEX Airdrop Action 共有型定義
//!
//! Solana Actions のワイヤ形式と、Zeta GraphQL API の
//! エアドロップ適格性クエリで使用するデータ構造を提供する。
//!
//! ## エンコーディング規則
//! - Base58: Solanaアドレス（`account`, `authority`）
//! - Base64: シリアライズ済みトランザクション

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Solana Actions (GET / OPTIONS)
// ---------------------------------------------------------------------------

/// GET / OPTIONS で返却するアクション記述子。
/// Blinkクライアントはこの内容をカードとして描画する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionGetResponse {
    /// アクションのタイトル
    pub title: String,
    /// アイコン画像の絶対URL
    pub icon: String,
    /// アクションの説明文
    pub description: String,
    /// ボタンに表示するラベル
    pub label: String,
}

// ---------------------------------------------------------------------------
// Solana Actions (POST)
// ---------------------------------------------------------------------------

/// POST リクエストボディ。
/// `account` は欠落・null・文字列以外の値もすべて不正なアカウントとして扱うため、
/// 型を固定せず `serde_json::Value` で受ける。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionPostRequest {
    /// Base58エンコードされたウォレットアドレス
    #[serde(default)]
    pub account: Option<serde_json::Value>,
}

impl ActionPostRequest {
    /// `account` が文字列ならその値。
    pub fn account_str(&self) -> Option<&str> {
        self.account.as_ref().and_then(|v| v.as_str())
    }
}

/// POST レスポンス（アクションレスポンスエンベロープ）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPostResponse {
    /// Base64エンコードされた未署名トランザクション（legacy wire format）
    pub transaction: String,
    /// ウォレットに表示するメッセージ
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// actions.json
// ---------------------------------------------------------------------------

/// サイトルートで公開する `actions.json`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRuleObject>,
}

/// `actions.json` のルール1件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRuleObject {
    /// マッチ対象のパスパターン（例: `/api/actions/**`）
    pub path_pattern: String,
    /// 対応するアクションAPIのパス
    pub api_path: String,
}

// ---------------------------------------------------------------------------
// GraphQL (Zeta Airdrop API)
// ---------------------------------------------------------------------------

/// `GetAirdropFinalFrontend` クエリ本文。
pub const GET_AIRDROP_FINAL_FRONTEND_QUERY: &str = "query GetAirdropFinalFrontend($authority: String!) {\n  getAirdropFinalFrontend(authority: $authority) {\n    authority\n    community_allocation\n    eligibility\n    main_allocation\n    og_allocation\n    s1_allocation\n    s2_allocation\n    total_allocation\n    __typename\n  }\n}\n";

/// 適格と判定された場合の `eligibility` 値。
pub const ELIGIBLE: &str = "ELIGIBLE";

/// GraphQL リクエストボディ。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlRequest<V> {
    pub query: String,
    pub variables: V,
}

/// `GetAirdropFinalFrontend` の変数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirdropQueryVariables {
    /// Base58エンコードされたウォレットアドレス
    pub authority: String,
}

/// GraphQL レスポンス。`data` と `errors` は共に欠落しうる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL エラー1件。`message` 以外のフィールドは使用しない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `GetAirdropFinalFrontend` クエリの `data` 部。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirdropQueryData {
    #[serde(rename = "getAirdropFinalFrontend", default)]
    pub get_airdrop_final_frontend: Option<AirdropAllocation>,
}

/// エアドロップ適格性レコード。
/// 数量は整数・小数・文字列のいずれでも返りうるため `serde_json::Value` のまま保持する。
/// 欠落時は `Value::Null`。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirdropAllocation {
    /// 照会したウォレットアドレス
    #[serde(default)]
    pub authority: Option<String>,
    /// 適格性 ("ELIGIBLE" など)
    #[serde(default)]
    pub eligibility: Option<String>,
    /// 合計割当量
    #[serde(default)]
    pub total_allocation: serde_json::Value,
    #[serde(default)]
    pub community_allocation: serde_json::Value,
    #[serde(default)]
    pub main_allocation: serde_json::Value,
    #[serde(default)]
    pub og_allocation: serde_json::Value,
    #[serde(default)]
    pub s1_allocation: serde_json::Value,
    #[serde(default)]
    pub s2_allocation: serde_json::Value,
    #[serde(rename = "__typename", default, skip_serializing_if = "Option::is_none")]
    pub typename: Option<String>,
}

impl AirdropAllocation {
    /// `eligibility` が "ELIGIBLE" と完全一致するか。
    pub fn is_eligible(&self) -> bool {
        self.eligibility.as_deref() == Some(ELIGIBLE)
    }
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_json_uses_camel_case() {
        let doc = ActionsJson {
            rules: vec![ActionRuleObject {
                path_pattern: "/api/actions/**".to_string(),
                api_path: "/api/actions/**".to_string(),
            }],
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "rules": [{"pathPattern": "/api/actions/**", "apiPath": "/api/actions/**"}]
            })
        );
    }

    #[test]
    fn test_post_response_omits_missing_message() {
        let response = ActionPostResponse {
            transaction: "AQID".to_string(),
            message: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({"transaction": "AQID"}));
    }

    /// 実際のAPIレスポンス形状をパースできることを確認
    #[test]
    fn test_parse_airdrop_response() {
        let body = serde_json::json!({
            "data": {
                "getAirdropFinalFrontend": {
                    "authority": "11111111111111111111111111111112",
                    "community_allocation": 0,
                    "eligibility": "ELIGIBLE",
                    "main_allocation": 1000,
                    "og_allocation": 0,
                    "s1_allocation": 200,
                    "s2_allocation": 34.5,
                    "total_allocation": 1234.5,
                    "__typename": "AirdropFinalFrontend"
                }
            }
        });

        let parsed: GraphQlResponse<AirdropQueryData> = serde_json::from_value(body).unwrap();
        let record = parsed.data.unwrap().get_airdrop_final_frontend.unwrap();
        assert!(record.is_eligible());
        assert_eq!(record.total_allocation.as_f64(), Some(1234.5));
        assert!(parsed.errors.is_none());
    }

    /// GraphQLエラー時は data が null になる
    #[test]
    fn test_parse_graphql_error_response() {
        let body = serde_json::json!({
            "data": null,
            "errors": [{"message": "Unauthorized", "errorType": "UnauthorizedException"}]
        });

        let parsed: GraphQlResponse<AirdropQueryData> = serde_json::from_value(body).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors.unwrap()[0].message, "Unauthorized");
    }

    /// `data` キー自体が無いレスポンスもパースできる
    #[test]
    fn test_parse_response_without_data() {
        let body = serde_json::json!({"errors": [{"message": "Unauthorized"}]});

        let parsed: GraphQlResponse<AirdropQueryData> = serde_json::from_value(body).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors.unwrap().len(), 1);
    }

    /// 割当量が文字列や null でもレコード全体は失敗しない
    #[test]
    fn test_parse_allocation_of_any_json_type() {
        let record: AirdropAllocation = serde_json::from_value(serde_json::json!({
            "eligibility": "ELIGIBLE",
            "total_allocation": "1234",
            "main_allocation": null
        }))
        .unwrap();
        assert_eq!(record.total_allocation, serde_json::json!("1234"));
        assert!(record.main_allocation.is_null());
        assert!(record.og_allocation.is_null());
    }

    #[test]
    fn test_post_request_account_str() {
        let parse = |v: serde_json::Value| serde_json::from_value::<ActionPostRequest>(v).unwrap();
        assert_eq!(parse(serde_json::json!({"account": "abc"})).account_str(), Some("abc"));
        assert_eq!(parse(serde_json::json!({"account": 123})).account_str(), None);
        assert_eq!(parse(serde_json::json!({"account": null})).account_str(), None);
        assert_eq!(parse(serde_json::json!({})).account_str(), None);
    }

    #[test]
    fn test_eligibility_is_case_sensitive() {
        let record = AirdropAllocation {
            eligibility: Some("eligible".to_string()),
            ..Default::default()
        };
        assert!(!record.is_eligible());
        assert!(!AirdropAllocation::default().is_eligible());
    }
}
