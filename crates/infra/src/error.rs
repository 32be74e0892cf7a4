//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: sqlx のエラー型をラップし、上位層が sqlx に直接依存しないようにする
//! - **行の不在はエラーではない**: 該当行がない場合は `Option` / `bool` の戻り値で表現し、
//!   このエラー型には含めない

use thiserror::Error;

/// インフラ層で発生するエラー
///
/// ユースケース層はこのエラーを受け取り、適切なサービスエラーに変換する。
#[derive(Debug, Error)]
pub enum InfraError {
    /// データベースエラー
    ///
    /// SQL クエリの実行失敗、接続エラー、制約違反など。
    #[error("データベースエラー: {0}")]
    Database(#[from] sqlx::Error),

    /// マイグレーションエラー
    #[error("マイグレーションエラー: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlxエラーからdatabaseバリアントに変換される() {
        let err: InfraError = sqlx::Error::RowNotFound.into();

        assert!(matches!(err, InfraError::Database(_)));
    }

    #[test]
    fn test_displayは日本語のラベルを含む() {
        let err: InfraError = sqlx::Error::RowNotFound.into();

        assert!(format!("{err}").starts_with("データベースエラー:"));
    }
}
