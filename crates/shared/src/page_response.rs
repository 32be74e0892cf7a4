//! # ページレスポンス
//!
//! オフセットページネーションの API レスポンスエンベロープ。
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "content": [...],
//!   "number": 0,
//!   "size": 20,
//!   "totalElements": 6,
//!   "totalPages": 1,
//!   "first": true,
//!   "last": true
//! }
//! ```

use serde::{Deserialize, Serialize};

/// ページレスポンス
///
/// 一覧の 1 ページ分と、全件数・ページ位置のメタデータを持つ。
/// メタデータは [`PageResponse::new`] で (ページ番号, サイズ, 全件数) から計算する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> PageResponse<T> {
    /// ページ内容とメタデータからレスポンスを組み立てる
    ///
    /// `total_pages` は全件数をサイズで割った切り上げ。
    /// 範囲外のページでも `content` が空になるだけで、全件数は正確に保たれる。
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: i64) -> Self {
        let size = size.max(1);
        let total_pages = u32::try_from(total_elements.max(0).div_ceil(i64::from(size)))
            .unwrap_or(u32::MAX);
        Self {
            content,
            number,
            size,
            total_elements,
            total_pages,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }
}
