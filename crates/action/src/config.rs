//! # アクション設定・共有状態
//!
//! 環境変数からの設定読み込みとアクションサーバーの共有状態の定義。

use std::str::FromStr;

use anyhow::Context;
use solana_sdk::pubkey::Pubkey;

use crate::eligibility::EligibilityApi;
use crate::rpc::BlockhashSource;

/// `SOLANA_RPC` 未設定時のRPCエンドポイント（mainnet-beta）
pub const DEFAULT_SOLANA_RPC: &str = "https://api.mainnet-beta.solana.com";
/// `ZETA_API_BASE_URL` 未設定時のGraphQL APIベースURL
pub const DEFAULT_ZETA_API_BASE_URL: &str = "https://api-gql.zeta.markets";
/// `BIND_ADDR` 未設定時の待ち受けアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 起動時に一度だけ読み込む設定値。
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// Solana RPC URL（blockhash取得用）
    pub solana_rpc_url: String,
    /// Zeta GraphQL APIのベースURL
    pub zeta_api_base_url: String,
    /// `x-api-key` ヘッダ値。Noneの場合はヘッダを付与しない。
    pub zeta_api_key: Option<String>,
    /// チェック手数料の送金先
    pub fee_destination: Pubkey,
    /// アイコンURLの基準オリジン。Noneの場合はリクエストのHostから組み立てる。
    pub public_base_url: Option<reqwest::Url>,
    /// 待ち受けアドレス
    pub bind_addr: String,
}

impl ActionConfig {
    /// 環境変数から構築する。
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー参照関数から構築する。空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let solana_rpc_url = get("SOLANA_RPC").unwrap_or_else(|| DEFAULT_SOLANA_RPC.to_string());
        reqwest::Url::parse(&solana_rpc_url)
            .with_context(|| format!("SOLANA_RPCが不正なURLです: {solana_rpc_url}"))?;

        let zeta_api_base_url = get("ZETA_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ZETA_API_BASE_URL.to_string());
        reqwest::Url::parse(&zeta_api_base_url)
            .with_context(|| format!("ZETA_API_BASE_URLが不正なURLです: {zeta_api_base_url}"))?;

        let fee_destination = get("FEE_DESTINATION")
            .ok_or_else(|| anyhow::anyhow!("FEE_DESTINATIONが設定されていません"))?;
        let fee_destination = Pubkey::from_str(fee_destination.trim())
            .map_err(|e| anyhow::anyhow!("FEE_DESTINATIONのBase58デコードに失敗: {e}"))?;

        let public_base_url = get("PUBLIC_BASE_URL")
            .map(|s| {
                reqwest::Url::parse(&s)
                    .with_context(|| format!("PUBLIC_BASE_URLが不正なURLです: {s}"))
            })
            .transpose()?;

        Ok(Self {
            solana_rpc_url,
            zeta_api_base_url,
            zeta_api_key: get("ZETA_API_KEY"),
            fee_destination,
            public_base_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

/// アクションサーバーの共有状態。
/// リクエスト間で共有されるが、起動後は変更されない。
pub struct ActionState {
    /// チェック手数料の送金先
    pub fee_destination: Pubkey,
    /// アイコンURLの基準オリジン
    pub public_base_url: Option<reqwest::Url>,
    /// recent blockhash の取得元（トレイトで抽象化）
    pub blockhash_source: Box<dyn BlockhashSource>,
    /// エアドロップ適格性API（トレイトで抽象化）
    pub eligibility_api: Box<dyn EligibilityApi>,
}
