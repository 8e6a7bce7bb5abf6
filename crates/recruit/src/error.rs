//! # 応募審査のエラー定義
//!
//! | 種別 | 発生箇所 | ネットワーク |
//! |------|----------|--------------|
//! | バリデーション | 状態遷移の事前条件、ページ番号 | 送信しない |
//! | API エラー | リモートサービスの非 2xx・通信失敗 | 送信済み |
//!
//! いずれも処理全体を止めるものではなく、利用者が手動で再試行できる。

use julge_client::ApiError;
use julge_domain::{
    DomainError,
    application::{ApplicantStatus, ApplicationId},
};
use thiserror::Error;

/// 一覧取得が失敗したときに利用者へ表示するメッセージ
pub const LOAD_FAILED_MESSAGE: &str = "応募者一覧の読み込み中にエラーが発生しました";

/// 一覧取得エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// 入力値が不正
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// 取得対象がまだ指定されていない
    #[error("読み込む公告が指定されていません")]
    NoQuery,

    /// リモートサービスのエラー
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LoadError {
    /// 利用者へ表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(_) => LOAD_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// 状態遷移エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// 審査待ちでない応募者への遷移要求（呼び出し側の誤り）
    #[error("応募 {id} は審査待ちではありません（現在: {status}）")]
    NotPending {
        id:     ApplicationId,
        status: ApplicantStatus,
    },

    /// 同じ応募者への状態変更が処理中
    #[error("応募 {0} の状態変更は処理中です")]
    InFlight(ApplicationId),

    /// 表示中の一覧にない応募者
    #[error("応募 {0} は表示中の一覧にありません")]
    UnknownApplicant(ApplicationId),

    /// リモートサービスのエラー
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl TransitionError {
    /// 利用者へ表示するメッセージ
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => format!("状態の変更に失敗しました: {e}"),
            other => other.to_string(),
        }
    }

    /// リクエストを送信せずに拒否されたかどうか
    pub fn is_rejected_locally(&self) -> bool {
        matches!(
            self,
            Self::NotPending { .. } | Self::InFlight(_) | Self::UnknownApplicant(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_api由来の一覧取得エラーは固定メッセージ() {
        let err = LoadError::from(ApiError::Unexpected {
            status:  500,
            message: "boom".to_string(),
        });

        assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn test_状態遷移のapiエラーはメッセージを含める() {
        let err = TransitionError::from(ApiError::Forbidden("権限なし".to_string()));

        assert_eq!(
            err.user_message(),
            "状態の変更に失敗しました: 権限がありません: 権限なし"
        );
        assert!(!err.is_rejected_locally());
    }

    #[test]
    fn test_事前条件違反はローカルで拒否される() {
        let err = TransitionError::NotPending {
            id:     ApplicationId::new("a1").unwrap(),
            status: ApplicantStatus::Accepted,
        };

        assert!(err.is_rejected_locally());
        assert_eq!(
            err.to_string(),
            "応募 a1 は審査待ちではありません（現在: accepted）"
        );
    }
}
