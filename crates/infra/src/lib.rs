//! # Meibo インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理
//! - **トランザクション管理**: 書き込み操作のトランザクション境界
//! - **リポジトリ実装**: [`repository::PersonRepository`] の PostgreSQL 実装
//!
//! ## 依存関係
//!
//! ```text
//! app → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::InfraError;
