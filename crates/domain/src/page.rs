//! # ページング指定
//!
//! 一覧取得のページ番号・サイズ・ソート指定を表す値オブジェクト。
//!
//! ## 設計方針
//!
//! - **ホワイトリスト**: ソート対象は [`PersonSortField`] に列挙したフィールドのみ。
//!   ストレージ層はこの列挙型から列名を引くため、外部入力が SQL に直接渡ることはない
//! - **クエリ表記**: ソートキーは `name,asc` 形式の文字列から解釈する

use std::str::FromStr;

use crate::{error::DomainError, person::Person};

/// ページサイズのデフォルト値
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(DomainError::Validation(format!("不正なソート方向: {}", s)))
        }
    }
}

/// ソート対象フィールド
///
/// API のプロパティ名（`phoneNumber` など）で指定される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonSortField {
    Id,
    Name,
    Cpf,
    PhoneNumber,
    BirthDate,
    Adress,
}

impl PersonSortField {
    /// 対応するデータベース列名を返す
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Cpf => "cpf",
            Self::PhoneNumber => "phone_number",
            Self::BirthDate => "birth_date",
            Self::Adress => "adress",
        }
    }
}

impl FromStr for PersonSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "cpf" => Ok(Self::Cpf),
            "phoneNumber" => Ok(Self::PhoneNumber),
            "birthDate" => Ok(Self::BirthDate),
            "adress" => Ok(Self::Adress),
            _ => Err(DomainError::Validation(format!(
                "不正なソートフィールド: {}",
                s
            ))),
        }
    }
}

/// ソートキー（フィールドと方向の組）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: PersonSortField,
    pub direction: SortDirection,
}

impl FromStr for SortKey {
    type Err = DomainError;

    /// `name,asc` / `name,desc` / `name`（方向省略時は昇順）を解釈する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let field = parts
            .next()
            .ok_or_else(|| DomainError::Validation(format!("不正なソートキー: {}", s)))?
            .parse::<PersonSortField>()?;
        let direction = match parts.next() {
            Some(dir) => dir.parse::<SortDirection>()?,
            None => SortDirection::Asc,
        };
        if parts.next().is_some() {
            return Err(DomainError::Validation(format!("不正なソートキー: {}", s)));
        }
        Ok(Self { field, direction })
    }
}

/// ページリクエスト
///
/// ページ番号は 0 始まり。サイズは 1 以上に切り上げる
/// （一覧取得は失敗しないという契約を守るため、不正値は拒否せず補正する）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: u32,
    sort: Vec<SortKey>,
}

impl PageRequest {
    pub fn new(number: u32, size: u32, sort: Vec<SortKey>) -> Self {
        Self {
            number,
            size: size.max(1),
            sort,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> &[SortKey] {
        &self.sort
    }

    /// SQL の LIMIT に渡す値
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }

    /// SQL の OFFSET に渡す値
    ///
    /// 極端なページ番号でも桁あふれさせない（飽和乗算）。
    pub fn offset(&self) -> i64 {
        i64::from(self.number).saturating_mul(i64::from(self.size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, Vec::new())
    }
}

/// ページ取得の結果（エンティティ一覧と全件数）
///
/// `total_elements` はページングを適用しない全件数。
/// 範囲外のページでも正確な値を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonPage {
    pub persons: Vec<Person>,
    pub total_elements: i64,
}
