//! # ブロックチェーン連携モジュール
//!
//! チェック手数料の送金トランザクション構築を行う。

#[allow(deprecated)] // solana-sdk 2.x のsystem_instruction/system_program非推奨警告を抑制
pub mod fee_tx;
