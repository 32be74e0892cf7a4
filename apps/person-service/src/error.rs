//! # Person Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーは NotFound のみ**: それ以外の失敗は 500 として扱い、
//!   詳細はログにのみ出力する
//! - **変換は一箇所**: ハンドラは [`ApiError`] を返すだけで、ステータスコードと
//!   レスポンスボディの組み立ては `IntoResponse` 実装に集約する

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use meibo_infra::InfraError;
use meibo_shared::ErrorResponse;
use thiserror::Error;

/// ユースケース層で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// リソースが見つからない
    ///
    /// メッセージには対象の ID を含める。
    #[error("{0}")]
    NotFound(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

/// API 層のエラー（発生元のエラーとリクエストパスの組）
///
/// ハンドラがユースケースのエラーをパス情報とともにラップし、
/// `IntoResponse` 実装が一括で HTTP レスポンスに変換する。
#[derive(Debug)]
pub struct ApiError {
    error: ServiceError,
    path: String,
}

impl ApiError {
    pub fn new(error: ServiceError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let now = Utc::now();
        let (status, body) = match &self.error {
            ServiceError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found(now, msg.clone(), self.path),
            ),
            ServiceError::Database(e) => {
                tracing::error!("データベースエラー: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(now, self.path),
                )
            }
            ServiceError::Internal(msg) => {
                tracing::error!("内部エラー: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(now, self.path),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_not_foundは404とエラーボディに変換される() {
        let err = ApiError::new(
            ServiceError::NotFound("人物が見つかりません: id=1000".to_string()),
            "/persons/1000",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "人物が見つかりません: id=1000");
        assert_eq!(json["path"], "/persons/1000");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_内部エラーは500と固定メッセージに変換される() {
        let err = ApiError::new(
            ServiceError::Internal("想定外の状態".to_string()),
            "/persons",
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["message"], "内部エラーが発生しました");
        // 内部情報はボディに含めない
        assert!(!json["message"].as_str().unwrap().contains("想定外"));
    }
}
