//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **型による分類**: エラーの種類を列挙型で明示し、パターンマッチで処理可能に
//! - **thiserror 活用**: `#[error(...)]` マクロでエラーメッセージを自動生成
//! - **同期的な拒否**: ドメインエラーはネットワーク呼び出しの前に検出される
//!
//! ## 使用例
//!
//! ```rust
//! use julge_domain::{
//!     DomainError,
//!     application::{ApplicantStatus, ReviewDecision},
//! };
//!
//! let result = ApplicantStatus::Accepted.apply(ReviewDecision::Rejected);
//! assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 必須の ID が空
    /// - ページサイズが 0
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 不正な状態遷移
    ///
    /// 終端ステータス（承認済み・拒否済み・キャンセル）からの遷移を要求した場合に使用する。
    #[error("{from} から {to} への状態遷移はできません")]
    InvalidTransition {
        /// 遷移元のステータス
        from: &'static str,
        /// 要求された遷移先のステータス
        to:   &'static str,
    },
}
