//! # GET|OPTIONS /actions.json
//!
//! サイトルートからアクションAPIを発見するためのルール。

use axum::Json;
use zex_types::{ActionRuleObject, ActionsJson};

/// GET|OPTIONS /actions.json: `/api/actions/**` をそのままアクションAPIにマッピングする。
pub async fn handle_actions_json() -> Json<ActionsJson> {
    Json(ActionsJson {
        rules: vec![ActionRuleObject {
            path_pattern: "/api/actions/**".to_string(),
            api_path: "/api/actions/**".to_string(),
        }],
    })
}
