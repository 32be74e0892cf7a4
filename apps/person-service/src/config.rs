//! # Person Service 設定
//!
//! 環境変数から Person Service サーバーの設定を読み込む。

use std::env;

/// Person Service サーバーの設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host: env::var("MEIBO_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("MEIBO_PORT")
                .expect("MEIBO_PORT が設定されていません")
                .parse()
                .expect("MEIBO_PORT は有効なポート番号である必要があります"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL が設定されていません"),
        }
    }
}
