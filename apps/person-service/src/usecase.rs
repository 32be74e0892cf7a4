//! # ユースケース層
//!
//! リポジトリを組み合わせて 1 操作 1 ワークフローを実装する。

pub mod person;

pub use person::PersonUseCaseImpl;
