//! # 転送オブジェクト
//!
//! API 境界で交換する人物の表現。リクエストボディ・レスポンスボディの両方に使用する。

use chrono::{DateTime, Utc};
use meibo_domain::person::Person;
use serde::{Deserialize, Serialize};

/// 人物 DTO
///
/// `id` は入力では省略可能（無視される）、出力では必ず設定される。
/// `adress` の綴りはワイヤ契約の一部であり変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub phone_number: String,
    pub birth_date: DateTime<Utc>,
    pub adress: String,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id: Some(person.id().as_i64()),
            name: person.name().to_string(),
            cpf: person.cpf().to_string(),
            phone_number: person.phone_number().to_string(),
            birth_date: person.birth_date(),
            adress: person.adress().to_string(),
        }
    }
}
