//! # チェック手数料トランザクション構築ヘルパー
//!
//! 適格性チェックの対価として、リクエスト元ウォレットから送金先へ
//! 固定額を送るSystem Program transferを1命令だけ含むトランザクションを構築する。
//! 手数料は適格性の結果に関わらず同額。

use base64::Engine;
use solana_sdk::{
    hash::Hash,
    message::Message,
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    system_instruction,
    transaction::Transaction,
};

use crate::error::ActionError;

/// チェック手数料（0.0001 SOL）
pub const CHECK_FEE_LAMPORTS: u64 = LAMPORTS_PER_SOL / 10_000;

/// Base64エンジン（Standard）
pub(crate) fn b64() -> base64::engine::GeneralPurpose {
    base64::engine::general_purpose::STANDARD
}

/// チェック手数料トランザクションを構築する。
///
/// fee payer はリクエスト元ウォレット。署名スロットは空のまま返し、
/// 署名とブロードキャストはウォレット側で行う。
pub fn build_check_fee_tx(payer: &Pubkey, destination: &Pubkey, blockhash: &Hash) -> Transaction {
    let transfer_ix = system_instruction::transfer(payer, destination, CHECK_FEE_LAMPORTS);
    let message = Message::new_with_blockhash(&[transfer_ix], Some(payer), blockhash);
    Transaction::new_unsigned(message)
}

/// 未署名トランザクションをlegacy wire formatでシリアライズし、Base64エンコードする。
pub fn encode_transaction(tx: &Transaction) -> Result<String, ActionError> {
    let tx_bytes = bincode::serialize(tx)
        .map_err(|e| ActionError::Serialization(format!("failed to serialize transaction: {e}")))?;
    Ok(b64().encode(tx_bytes))
}
