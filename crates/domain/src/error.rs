//! # ドメイン層エラー定義

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 現状はソート指定の解釈失敗のみが該当する。
/// API 層でこのエラーを受け取り、適切に処理する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値が期待する形式に合致しない場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
