//! # 人物
//!
//! 人物エンティティとそれに関連する値を定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: [`PersonId`] は DB 採番の整数 ID をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは不変、読み取りはアクセサ経由
//! - **ID の所有権**: ID の採番・一意性はストレージ層が唯一の責任を持つ。
//!   ドメイン層は採番済みの値を [`Person::from_db`] で受け取るのみ

use chrono::{DateTime, Utc};
use derive_more::Display;

/// 人物 ID（一意識別子）
///
/// データベースの BIGSERIAL により採番される。
/// Newtype パターンで型安全性を確保。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct PersonId(i64);

impl PersonId {
    /// 既存の整数値から人物 ID を作成する
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// 人物エンティティ
///
/// 名簿に登録された人物を表現する。他エンティティとの関連は持たない。
///
/// # 不変条件
///
/// - `id` はストレージ層が採番した値であり、生成後は変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    cpf: String,
    phone_number: String,
    birth_date: DateTime<Utc>,
    adress: String,
}

impl Person {
    /// DB から読み込んだ値でエンティティを復元する
    ///
    /// ID は採番済みであることを前提とする。
    pub fn from_db(
        id: PersonId,
        name: String,
        cpf: String,
        phone_number: String,
        birth_date: DateTime<Utc>,
        adress: String,
    ) -> Self {
        Self {
            id,
            name,
            cpf,
            phone_number,
            birth_date,
            adress,
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// CPF（ブラジルの個人識別番号）。形式の検証は行わない
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    pub fn adress(&self) -> &str {
        &self.adress
    }
}

/// 人物の記述フィールド一式
///
/// 挿入・更新の入力として使用する。ID は含まない
/// （挿入時はストレージ層が採番し、更新時はパスパラメータが対象を決める）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub cpf: String,
    pub phone_number: String,
    pub birth_date: DateTime<Utc>,
    pub adress: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_birth_date() -> DateTime<Utc> {
        "1999-08-01T10:09:20Z".parse().unwrap()
    }

    #[test]
    fn test_from_dbで全フィールドが復元される() {
        let person = Person::from_db(
            PersonId::from_i64(1),
            "João".to_string(),
            "086.395.593-32".to_string(),
            "75 98129-0360".to_string(),
            test_birth_date(),
            "Rua A, bairro B, número 30".to_string(),
        );

        assert_eq!(person.id().as_i64(), 1);
        assert_eq!(person.name(), "João");
        assert_eq!(person.cpf(), "086.395.593-32");
        assert_eq!(person.phone_number(), "75 98129-0360");
        assert_eq!(person.birth_date(), test_birth_date());
        assert_eq!(person.adress(), "Rua A, bairro B, número 30");
    }

    #[test]
    fn test_person_idのdisplayは内部値を出力する() {
        let id = PersonId::from_i64(42);
        assert_eq!(format!("{id}"), "42");
    }
}
