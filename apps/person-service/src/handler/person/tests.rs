use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    routing::get,
};
use chrono::{DateTime, Utc};
use meibo_domain::person::Person;
use meibo_infra::mock::{MockPersonRepository, MockTransactionManager};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use super::*;

// テスト用アプリケーション構築

fn create_test_app(repo: MockPersonRepository) -> Router {
    let usecase = PersonUseCaseImpl::new(Arc::new(repo), Arc::new(MockTransactionManager));
    let state = Arc::new(PersonState { usecase });

    Router::new()
        .route("/persons", get(list_persons).post(create_person))
        .route(
            "/persons/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .with_state(state)
}

// テストデータ生成

fn test_birth_date() -> DateTime<Utc> {
    "1999-08-01T10:09:20Z".parse().unwrap()
}

/// 名前昇順で Beatriz Barbosa, Felipe Santos, João Carlos, ... と並ぶ 6 件のシード
fn seed_persons(repo: &MockPersonRepository) {
    let names = [
        "Felipe Santos",
        "Beatriz Barbosa",
        "Vitória Sampaio",
        "João Carlos",
        "Rafael Costa",
        "Larissa Mendes",
    ];
    for (i, name) in names.iter().enumerate() {
        let id = i as i64 + 1;
        repo.add_person(Person::from_db(
            PersonId::from_i64(id),
            (*name).to_string(),
            format!("000.000.000-{:02}", id),
            format!("75 98129-03{:02}", id),
            test_birth_date(),
            format!("Rua {}, número {}", name, id),
        ));
    }
}

fn test_dto() -> PersonDto {
    PersonDto {
        id: Some(1),
        name: "João".to_string(),
        cpf: "086.395.593-32".to_string(),
        phone_number: "75 98129-0360".to_string(),
        birth_date: test_birth_date(),
        adress: "Rua A, bairro B, número 30".to_string(),
    }
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// テストケース

#[tokio::test]
async fn test_一覧_名前昇順ソートでページエンベロープが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/persons?sort=name,asc")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["totalElements"], 6);
    assert_eq!(json["content"][0]["name"], "Beatriz Barbosa");
    assert_eq!(json["content"][1]["name"], "Felipe Santos");
    assert_eq!(json["content"][2]["name"], "João Carlos");
}

#[tokio::test]
async fn test_一覧_範囲外のページは空で全件数は保持される() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/persons?page=50&size=10")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["content"], serde_json::json!([]));
    assert_eq!(json["totalElements"], 6);
    assert_eq!(json["number"], 50);
}

#[tokio::test]
async fn test_取得_存在するidで200とdtoが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/persons/1")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["id"], 1);
    assert!(json["name"].is_string());
    assert!(json["cpf"].is_string());
    assert!(json["phoneNumber"].is_string());
    assert!(json["birthDate"].is_string());
    assert!(json["adress"].is_string());
}

#[tokio::test]
async fn test_取得_存在しないidで404とエラーボディが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/persons/1000")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "Not Found");
    assert_eq!(json["message"], "人物が見つかりません: id=1000");
    assert_eq!(json["path"], "/persons/1000");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_作成_201とlocationヘッダと採番済みdtoが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/persons")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&test_dto()).unwrap()))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/persons/7")
    );

    let json = response_json(response).await;
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "João");
    assert_eq!(json["cpf"], "086.395.593-32");
}

#[tokio::test]
async fn test_更新_存在するidで200とパスのidを持つdtoが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);
    let dto = test_dto();

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/persons/2")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&dto).unwrap()))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["name"], dto.name);
    assert_eq!(json["cpf"], dto.cpf);
    assert_eq!(json["phoneNumber"], dto.phone_number);
}

#[tokio::test]
async fn test_更新_存在しないidで404が返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/persons/1000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&test_dto()).unwrap()))
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert!(json.get("name").is_none());
    assert_eq!(json["path"], "/persons/1000");
}

#[tokio::test]
async fn test_削除_存在するidで204と空ボディが返る() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo.clone());

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/persons/1")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(repo.count(), 5);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_削除_存在しないidで404が返り件数は変わらない() {
    // Given
    let repo = MockPersonRepository::new();
    seed_persons(&repo);
    let sut = create_test_app(repo.clone());

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/persons/1000")
        .body(Body::empty())
        .unwrap();

    // When
    let response = sut.oneshot(request).await.unwrap();

    // Then
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.count(), 6);
}
