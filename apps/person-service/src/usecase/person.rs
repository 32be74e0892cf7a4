//! # 人物管理ユースケース
//!
//! 一覧・取得・作成・更新・削除の 5 操作を提供する。
//!
//! ## 設計方針
//!
//! - **読み取りはエンティティを DTO に変換するだけ**
//! - **書き込みは DTO の記述フィールドをドラフトに写して保存するだけ**。
//!   ID は写さない（作成時はストレージ層が採番し、更新時はパスパラメータが対象を決める）
//! - **不在は NotFound に変換**: リポジトリの `None` / `false` をここで
//!   [`ServiceError::NotFound`] に写し、API 層にストレージ都合のエラー型を見せない

use std::sync::Arc;

use meibo_domain::{
    page::PageRequest,
    person::{PersonDraft, PersonId},
};
use meibo_infra::{db::TransactionManager, repository::PersonRepository};
use meibo_shared::PageResponse;

use crate::{dto::PersonDto, error::ServiceError};

/// 人物管理ユースケース
pub struct PersonUseCaseImpl {
    person_repository: Arc<dyn PersonRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl PersonUseCaseImpl {
    pub fn new(
        person_repository: Arc<dyn PersonRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            person_repository,
            tx_manager,
        }
    }

    /// ページ指定で人物一覧を取得する
    ///
    /// 範囲外のページでも失敗せず、空の一覧と正確な全件数を返す。
    pub async fn list_paged(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<PersonDto>, ServiceError> {
        let result = self.person_repository.find_all_paged(page).await?;

        Ok(PageResponse::new(
            result.persons.into_iter().map(PersonDto::from).collect(),
            page.number(),
            page.size(),
            result.total_elements,
        ))
    }

    /// ID で人物を取得する
    pub async fn find_by_id(&self, id: &PersonId) -> Result<PersonDto, ServiceError> {
        let person = self
            .person_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(PersonDto::from(person))
    }

    /// 人物を作成する
    ///
    /// DTO に ID が含まれていても無視する。採番済みの人物を DTO として返す。
    pub async fn insert(&self, dto: &PersonDto) -> Result<PersonDto, ServiceError> {
        let draft = draft_from_dto(dto);

        let mut tx = self.tx_manager.begin().await?;
        let Some(person) = self.person_repository.save(&mut tx, None, &draft).await? else {
            return Err(ServiceError::Internal(
                "挿入が行を返しませんでした".to_string(),
            ));
        };
        tx.commit().await?;

        Ok(PersonDto::from(person))
    }

    /// 人物を更新する（全フィールド上書き）
    ///
    /// 更新対象はパスパラメータの `id` で決まり、ボディ内の ID は使用しない。
    /// 該当行の不在は保存時に判明し、NotFound として返す。
    pub async fn update(&self, dto: &PersonDto, id: &PersonId) -> Result<PersonDto, ServiceError> {
        let draft = draft_from_dto(dto);

        let mut tx = self.tx_manager.begin().await?;
        let Some(person) = self
            .person_repository
            .save(&mut tx, Some(id), &draft)
            .await?
        else {
            return Err(not_found(id));
        };
        tx.commit().await?;

        Ok(PersonDto::from(person))
    }

    /// ID で人物を削除する
    ///
    /// 物理削除のみ（論理削除はしない）。該当行がなければ NotFound。
    pub async fn delete(&self, id: &PersonId) -> Result<(), ServiceError> {
        let mut tx = self.tx_manager.begin().await?;
        if !self.person_repository.delete_by_id(&mut tx, id).await? {
            return Err(not_found(id));
        }
        tx.commit().await?;

        Ok(())
    }
}

/// DTO の記述フィールドをドラフトに写す
///
/// ID は写さない。
fn draft_from_dto(dto: &PersonDto) -> PersonDraft {
    PersonDraft {
        name: dto.name.clone(),
        cpf: dto.cpf.clone(),
        phone_number: dto.phone_number.clone(),
        birth_date: dto.birth_date,
        adress: dto.adress.clone(),
    }
}

fn not_found(id: &PersonId) -> ServiceError {
    ServiceError::NotFound(format!("人物が見つかりません: id={}", id))
}
