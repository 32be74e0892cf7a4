//! # Person Service サーバー
//!
//! 人物名簿の CRUD API を提供するサービス。
//!
//! ## 役割
//!
//! - **HTTP API**: `/persons` 以下の一覧・取得・作成・更新・削除
//! - **データ永続化**: PostgreSQL への人物エンティティ保存
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `MEIBO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `MEIBO_PORT` | **Yes** | ポート番号 |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p meibo-person-service
//!
//! # 本番環境
//! MEIBO_PORT=3000 DATABASE_URL=postgres://... cargo run -p meibo-person-service --release
//! ```

mod config;
mod dto;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};
use config::AppConfig;
use handler::{
    PersonState,
    create_person,
    delete_person,
    get_person,
    health_check,
    list_persons,
    update_person,
};
use meibo_infra::{
    db::{self, PgTransactionManager},
    repository::PostgresPersonRepository,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usecase::PersonUseCaseImpl;

/// Person Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,meibo=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = AppConfig::from_env();

    tracing::info!(
        "Person Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("データベースに接続しました");

    // マイグレーションを適用
    db::run_migrations(&pool).await?;
    tracing::info!("マイグレーションを適用しました");

    // 依存コンポーネントを初期化
    let person_repository = Arc::new(PostgresPersonRepository::new(pool.clone()));
    let tx_manager = Arc::new(PgTransactionManager::new(pool));
    let person_usecase = PersonUseCaseImpl::new(person_repository, tx_manager);
    let person_state = Arc::new(PersonState {
        usecase: person_usecase,
    });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(person_state)
        .layer(TraceLayer::new_for_http());

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Person Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
