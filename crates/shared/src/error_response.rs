//! # エラーレスポンス
//!
//! API 全体で共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はサービス側の責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供する

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// 発生時刻・HTTP ステータス・短いラベル・メッセージ・リクエストパスを持つ。
/// `message` には原因となったエラーのメッセージ（対象 ID を含む）をそのまま載せる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(
        timestamp: DateTime<Utc>,
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
        }
    }

    /// 404 Not Found
    pub fn not_found(
        timestamp: DateTime<Utc>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self::new(timestamp, 404, "Not Found", message, path)
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値（内部情報を漏らさないため）。
    pub fn internal_error(timestamp: DateTime<Utc>, path: impl Into<String>) -> Self {
        Self::new(
            timestamp,
            500,
            "Internal Server Error",
            "内部エラーが発生しました",
            path,
        )
    }
}
