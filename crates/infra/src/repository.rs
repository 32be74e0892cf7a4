//! # リポジトリ実装
//!
//! 人物テーブルへの永続化操作を定義・実装する。

pub mod person_repository;

pub use person_repository::{PersonRepository, PostgresPersonRepository};
