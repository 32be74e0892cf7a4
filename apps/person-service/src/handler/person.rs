//! # 人物ハンドラ
//!
//! 人物 CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /persons` - 一覧（ページング・ソート対応）
//! - `GET /persons/{id}` - 取得
//! - `POST /persons` - 作成（Location ヘッダ付き 201）
//! - `PUT /persons/{id}` - 更新（全フィールド上書き）
//! - `DELETE /persons/{id}` - 削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use meibo_domain::{
    page::{DEFAULT_PAGE_SIZE, PageRequest, SortKey},
    person::PersonId,
};
use serde::Deserialize;

use crate::{
    dto::PersonDto,
    error::{ApiError, ServiceError},
    usecase::PersonUseCaseImpl,
};

/// 人物 API の共有状態
pub struct PersonState {
    pub usecase: PersonUseCaseImpl,
}

// --- リクエスト型 ---

/// 一覧のクエリパラメータ
///
/// `sort` は `name,asc` 形式で複数指定できる。
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    #[serde(default)]
    pub sort: Vec<String>,
}

impl ListQuery {
    /// クエリパラメータをページリクエストに変換する
    ///
    /// 解釈できないソートキーは読み飛ばす（ソート対象はホワイトリストのみ）。
    fn into_page_request(self) -> PageRequest {
        let sort: Vec<SortKey> = self
            .sort
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        )
    }
}

// --- ハンドラ ---

/// GET /persons
///
/// ページ指定で人物一覧を取得する。
pub async fn list_persons(
    State(state): State<Arc<PersonState>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page_request = query.into_page_request();

    let page = state
        .usecase
        .list_paged(&page_request)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok((StatusCode::OK, Json(page)))
}

/// GET /persons/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 人物 DTO
/// - `404 Not Found`: 人物が見つからない
pub async fn get_person(
    State(state): State<Arc<PersonState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PersonId::from_i64(id);

    let dto = state
        .usecase
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /persons
///
/// ## レスポンス
///
/// - `201 Created`: 採番済みの人物 DTO。`Location` ヘッダに `/persons/{id}` を設定
pub async fn create_person(
    State(state): State<Arc<PersonState>>,
    OriginalUri(uri): OriginalUri,
    Json(req): Json<PersonDto>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state
        .usecase
        .insert(&req)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    let Some(id) = created.id else {
        return Err(ApiError::new(
            ServiceError::Internal("作成された人物に ID がありません".to_string()),
            uri.path(),
        ));
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/persons/{}", id))],
        Json(created),
    ))
}

/// PUT /persons/{id}
///
/// 更新対象はパスパラメータで決まり、ボディ内の ID は使用しない。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の人物 DTO
/// - `404 Not Found`: 人物が見つからない
pub async fn update_person(
    State(state): State<Arc<PersonState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    Json(req): Json<PersonDto>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PersonId::from_i64(id);

    let updated = state
        .usecase
        .update(&req, &id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /persons/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功（ボディなし）
/// - `404 Not Found`: 人物が見つからない
pub async fn delete_person(
    State(state): State<Arc<PersonState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PersonId::from_i64(id);

    state
        .usecase
        .delete(&id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests;
