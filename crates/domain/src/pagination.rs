//! # オフセットベースのページネーション
//!
//! 応募者一覧のページ位置を表すカーソル。
//! 次ページの有無はリモートサービスが正とする。

use std::num::NonZeroU32;

use crate::DomainError;

/// 1 ページあたりの件数（値オブジェクト）
///
/// # 不変条件
///
/// - 1 以上
///
/// # 使用例
///
/// ```rust
/// use julge_domain::pagination::PageLimit;
///
/// let limit = PageLimit::new(5).unwrap();
/// assert_eq!(limit.get(), 5);
/// assert!(PageLimit::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageLimit(NonZeroU32);

impl PageLimit {
    /// 応募者一覧のデフォルト件数
    pub const DEFAULT: Self = Self(NonZeroU32::new(5).unwrap());

    pub fn new(value: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(value).map(Self).ok_or_else(|| {
            DomainError::Validation("ページサイズは 1 以上である必要があります".to_string())
        })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ページネーションカーソル
///
/// 一覧コントローラが排他的に所有する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    offset:   u32,
    limit:    PageLimit,
    has_next: bool,
}

impl PaginationCursor {
    /// 先頭ページのカーソル（次ページの有無は未確定のため `false`）
    pub fn first(limit: PageLimit) -> Self {
        Self {
            offset: 0,
            limit,
            has_next: false,
        }
    }

    pub fn new(offset: u32, limit: PageLimit, has_next: bool) -> Self {
        Self {
            offset,
            limit,
            has_next,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// 次ページのオフセット
    ///
    /// 次ページがない場合は `None`。
    pub fn next_offset(&self) -> Option<u32> {
        if !self.has_next {
            return None;
        }
        self.offset.checked_add(self.limit.get())
    }

    /// 前ページのオフセット
    ///
    /// 先頭ページでは `None`。ページ境界に揃っていない場合も 0 で止まる。
    pub fn previous_offset(&self) -> Option<u32> {
        if self.offset == 0 {
            return None;
        }
        Some(self.offset.saturating_sub(self.limit.get()))
    }

    /// 1 始まりのページ番号
    pub fn page_number(&self) -> u32 {
        self.offset / self.limit.get() + 1
    }

    /// 1 始まりのページ番号に対応するオフセット
    pub fn offset_of_page(limit: PageLimit, page_number: u32) -> Result<u32, DomainError> {
        if page_number == 0 {
            return Err(DomainError::Validation(
                "ページ番号は 1 以上である必要があります".to_string(),
            ));
        }
        (page_number - 1)
            .checked_mul(limit.get())
            .ok_or_else(|| DomainError::Validation(format!("ページ番号が大きすぎます: {page_number}")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn limit() -> PageLimit {
        PageLimit::new(5).unwrap()
    }

    #[test]
    fn test_ページサイズ0はバリデーションエラー() {
        assert!(matches!(PageLimit::new(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_デフォルトのページサイズは5() {
        assert_eq!(PageLimit::default().get(), 5);
    }

    #[test]
    fn test_先頭ページには前ページがない() {
        let cursor = PaginationCursor::first(limit());

        assert_eq!(cursor.previous_offset(), None);
        assert_eq!(cursor.next_offset(), None);
        assert_eq!(cursor.page_number(), 1);
    }

    #[test]
    fn test_次ページがあればオフセットを進める() {
        let cursor = PaginationCursor::new(5, limit(), true);

        assert_eq!(cursor.next_offset(), Some(10));
        assert_eq!(cursor.previous_offset(), Some(0));
        assert_eq!(cursor.page_number(), 2);
    }

    #[test]
    fn test_前ページは0で止まる() {
        let cursor = PaginationCursor::new(3, limit(), false);

        assert_eq!(cursor.previous_offset(), Some(0));
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 5)]
    #[case(4, 15)]
    fn test_ページ番号からオフセットを求める(#[case] page: u32, #[case] expected: u32) {
        assert_eq!(PaginationCursor::offset_of_page(limit(), page), Ok(expected));
    }

    #[test]
    fn test_ページ番号0はバリデーションエラー() {
        assert!(PaginationCursor::offset_of_page(limit(), 0).is_err());
    }
}
