//! # POST /api/actions/zex-airdrop
//!
//! ## 処理フロー
//! 1. `account` をBase58公開鍵としてパース（失敗時は外部通信せず400）
//! 2. Solana RPCからrecent blockhashを取得
//! 3. リクエスト元をfee payerとするチェック手数料トランザクションを構築
//! 4. Zeta GraphQL APIに適格性を照会（2分タイムアウト）
//! 5. 未署名トランザクションとメッセージを返却
//!
//! どのステップの失敗もリトライせず、その時点で400として返す。

mod handler;


pub use handler::handle_check;
