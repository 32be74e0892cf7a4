//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ワークフローはユースケース層に委譲

pub mod health;
pub mod person;

pub use health::health_check;
pub use person::{
    PersonState,
    create_person,
    delete_person,
    get_person,
    list_persons,
    update_person,
};
