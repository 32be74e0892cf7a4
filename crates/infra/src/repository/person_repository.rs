//! # PersonRepository
//!
//! 人物の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **不在は値で表現**: 該当行がない場合は `Option` / `bool` を返し、例外的な
//!   制御フローに頼らない
//! - **ソートのホワイトリスト**: ORDER BY 句は [`meibo_domain::page::PersonSortField`]
//!   の列名からのみ組み立てる。外部入力の文字列が SQL に直接渡ることはない
//! - **書き込みはトランザクション必須**: save / delete_by_id は [`TxContext`] を要求する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use meibo_domain::{
    page::{PageRequest, PersonPage, SortDirection, SortKey},
    person::{Person, PersonDraft, PersonId},
};
use sqlx::PgPool;

use crate::{db::TxContext, error::InfraError};

/// 人物リポジトリトレイト
///
/// 人物の永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ユースケース層から利用する。
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// ページ指定で人物一覧を取得する
    ///
    /// 全件数はページングを適用せずに数える。範囲外のページを指定した場合は
    /// 空の一覧と正確な全件数を返す。ソート指定がない場合は `id` 昇順。
    async fn find_all_paged(&self, page: &PageRequest) -> Result<PersonPage, InfraError>;

    /// ID で人物を検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(person))`: 人物が見つかった場合
    /// - `Ok(None)`: 人物が見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, InfraError>;

    /// 人物を保存する（ID の有無で挿入か更新かが決まる）
    ///
    /// - `id` が `None` の場合は挿入し、採番された ID を持つ人物を返す
    /// - `id` が `Some` の場合は全フィールドを上書きし、更新後の人物を返す。
    ///   該当行がなければ `Ok(None)`
    async fn save(
        &self,
        tx: &mut TxContext,
        id: Option<&PersonId>,
        draft: &PersonDraft,
    ) -> Result<Option<Person>, InfraError>;

    /// ID で人物を削除する
    ///
    /// 該当行を削除した場合は `true`、存在しなかった場合は `false` を返す。
    async fn delete_by_id(&self, tx: &mut TxContext, id: &PersonId) -> Result<bool, InfraError>;
}

/// DB の persons テーブルの行を表す中間構造体
#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    cpf: String,
    phone_number: String,
    birth_date: DateTime<Utc>,
    adress: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person::from_db(
            PersonId::from_i64(row.id),
            row.name,
            row.cpf,
            row.phone_number,
            row.birth_date,
            row.adress,
        )
    }
}

/// ソート指定から ORDER BY 句を組み立てる
///
/// 列名は [`meibo_domain::page::PersonSortField::column`] の返す固定文字列のみ。
/// ソート指定が空の場合はページングを決定的にするため `id` 昇順とする。
fn order_by_clause(sort: &[SortKey]) -> String {
    if sort.is_empty() {
        return "ORDER BY id ASC".to_string();
    }
    let keys: Vec<String> = sort
        .iter()
        .map(|key| {
            let direction = match key.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            format!("{} {}", key.field.column(), direction)
        })
        .collect();
    format!("ORDER BY {}", keys.join(", "))
}

/// PostgreSQL 実装の PersonRepository
#[derive(Debug, Clone)]
pub struct PostgresPersonRepository {
    pool: PgPool,
}

impl PostgresPersonRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    async fn find_all_paged(&self, page: &PageRequest) -> Result<PersonPage, InfraError> {
        let total_elements: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM persons")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!(
            r#"
                SELECT id, name, cpf, phone_number, birth_date, adress
                FROM persons
                {}
                LIMIT $1 OFFSET $2
                "#,
            order_by_clause(page.sort())
        );
        let rows: Vec<PersonRow> = sqlx::query_as(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(PersonPage {
            persons: rows.into_iter().map(Person::from).collect(),
            total_elements,
        })
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, InfraError> {
        let row: Option<PersonRow> = sqlx::query_as(
            r#"
                SELECT id, name, cpf, phone_number, birth_date, adress
                FROM persons
                WHERE id = $1
                "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Person::from))
    }

    async fn save(
        &self,
        tx: &mut TxContext,
        id: Option<&PersonId>,
        draft: &PersonDraft,
    ) -> Result<Option<Person>, InfraError> {
        let row: Option<PersonRow> = match id {
            None => {
                let inserted: PersonRow = sqlx::query_as(
                    r#"
                        INSERT INTO persons (name, cpf, phone_number, birth_date, adress)
                        VALUES ($1, $2, $3, $4, $5)
                        RETURNING id, name, cpf, phone_number, birth_date, adress
                        "#,
                )
                .bind(&draft.name)
                .bind(&draft.cpf)
                .bind(&draft.phone_number)
                .bind(draft.birth_date)
                .bind(&draft.adress)
                .fetch_one(tx.conn())
                .await?;
                Some(inserted)
            }
            Some(id) => {
                sqlx::query_as(
                    r#"
                        UPDATE persons
                        SET name = $1, cpf = $2, phone_number = $3, birth_date = $4, adress = $5
                        WHERE id = $6
                        RETURNING id, name, cpf, phone_number, birth_date, adress
                        "#,
                )
                .bind(&draft.name)
                .bind(&draft.cpf)
                .bind(&draft.phone_number)
                .bind(draft.birth_date)
                .bind(&draft.adress)
                .bind(id.as_i64())
                .fetch_optional(tx.conn())
                .await?
            }
        };

        Ok(row.map(Person::from))
    }

    async fn delete_by_id(&self, tx: &mut TxContext, id: &PersonId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM persons WHERE id = $1")
            .bind(id.as_i64())
            .execute(tx.conn())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use meibo_domain::page::{PersonSortField, SortDirection, SortKey};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PostgresPersonRepository>();
        assert_send_sync::<Box<dyn PersonRepository>>();
    }

    #[test]
    fn test_ソート指定なしはid昇順() {
        assert_eq!(order_by_clause(&[]), "ORDER BY id ASC");
    }

    #[test]
    fn test_単一キーのorder_by句() {
        let sort = vec![SortKey {
            field: PersonSortField::Name,
            direction: SortDirection::Asc,
        }];

        assert_eq!(order_by_clause(&sort), "ORDER BY name ASC");
    }

    #[test]
    fn test_複数キーはカンマ区切りで並ぶ() {
        let sort = vec![
            SortKey {
                field: PersonSortField::Name,
                direction: SortDirection::Desc,
            },
            SortKey {
                field: PersonSortField::BirthDate,
                direction: SortDirection::Asc,
            },
        ];

        assert_eq!(order_by_clause(&sort), "ORDER BY name DESC, birth_date ASC");
    }
}
