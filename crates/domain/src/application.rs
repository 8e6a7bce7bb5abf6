//! # 応募（Application）
//!
//! 求人公告に対する従業員の応募と、その審査ステータスの状態遷移を管理する。
//!
//! ## 状態遷移
//!
//! ```text
//! pending ──accept──▶ accepted
//!    │
//!    └────reject──▶ rejected
//!
//! canceled（リモートサービスのみが設定する）
//! ```
//!
//! `pending` 以外はすべて終端ステータスであり、クライアントからの遷移は定義しない。

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::DomainError;

/// 氏名が未登録の応募者に表示する文字列
pub const ANONYMOUS_APPLICANT: &str = "匿名の応募者";
/// 電話番号が未登録の応募者に表示する文字列
pub const NO_PHONE: &str = "連絡先なし";
/// 自己紹介が未登録の応募者に表示する文字列
pub const NO_BIO: &str = "自己紹介なし";

define_opaque_id! {
    /// 応募 ID
    ///
    /// リモートサービスが採番し、審査セッション中は不変。
    pub struct ApplicationId("応募 ID");
}

/// 応募ステータス
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApplicantStatus {
    /// 審査待ち
    Pending,
    /// 承認済み
    Accepted,
    /// 拒否済み
    Rejected,
    /// 応募者によるキャンセル
    Canceled,
}

impl ApplicantStatus {
    /// 終端ステータスかどうか
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// 審査結果を適用した遷移先ステータスを返す
    ///
    /// # エラー
    ///
    /// `pending` 以外から遷移しようとした場合は `DomainError::InvalidTransition` を返す。
    pub fn apply(self, decision: ReviewDecision) -> Result<Self, DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.into(),
                to:   decision.into(),
            });
        }
        Ok(decision.into())
    }
}

impl std::str::FromStr for ApplicantStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::Validation(format!(
                "不正な応募ステータス: {}",
                s
            ))),
        }
    }
}

/// 雇用主による審査結果
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReviewDecision {
    /// 承認
    Accepted,
    /// 拒否
    Rejected,
}

impl ReviewDecision {
    /// 審査待ちの応募者に提示できる審査結果（表示順）
    pub const ALL: [Self; 2] = [Self::Rejected, Self::Accepted];
}

impl From<ReviewDecision> for ApplicantStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Accepted => Self::Accepted,
            ReviewDecision::Rejected => Self::Rejected,
        }
    }
}

/// 応募者（表示用エンティティ）
///
/// 一覧の取得時に作成され、状態遷移の成功時にはステータスのみが更新される。
/// 一覧の再取得で丸ごと置き換えられる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    id: ApplicationId,
    name: String,
    phone: String,
    bio: String,
    status: ApplicantStatus,
    created_at: Option<DateTime<Utc>>,
}

/// 応募者の復元パラメータ
///
/// 未登録の項目は `None` で渡し、表示用のプレースホルダーに置き換える。
pub struct ApplicantRecord {
    pub id: ApplicationId,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub status: ApplicantStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Applicant {
    /// レコードから応募者を作成する
    ///
    /// 空文字列も未登録として扱う。
    pub fn from_record(record: ApplicantRecord) -> Self {
        Self {
            id: record.id,
            name: display_or(record.name, ANONYMOUS_APPLICANT),
            phone: display_or(record.phone, NO_PHONE),
            bio: display_or(record.bio, NO_BIO),
            status: record.status,
            created_at: record.created_at,
        }
    }

    pub fn id(&self) -> &ApplicationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn status(&self) -> ApplicantStatus {
        self.status
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// 審査待ちかどうか
    pub fn is_pending(&self) -> bool {
        self.status == ApplicantStatus::Pending
    }

    /// 現在のステータスで提示できる審査結果
    ///
    /// 終端ステータスでは空になる。
    pub fn available_decisions(&self) -> &'static [ReviewDecision] {
        if self.is_pending() {
            &ReviewDecision::ALL
        } else {
            &[]
        }
    }

    /// 審査結果を適用した新しい応募者を返す
    ///
    /// ステータス以外のフィールドは変更しない。
    pub fn decided(&self, decision: ReviewDecision) -> Result<Self, DomainError> {
        let status = self.status.apply(decision)?;
        Ok(Self {
            status,
            ..self.clone()
        })
    }
}

fn display_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder.to_string(),
    }
}

/// 1 ページ分の応募者一覧
///
/// # 不変条件
///
/// - ページ内で応募 ID は一意
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantPage {
    items:    Vec<Applicant>,
    has_next: bool,
}

impl ApplicantPage {
    /// 応募者一覧からページを作成する
    ///
    /// 重複した応募 ID は最初の要素のみ残し、除外した ID を返す。
    pub fn new(items: Vec<Applicant>, has_next: bool) -> (Self, Vec<ApplicationId>) {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        let mut unique = Vec::with_capacity(items.len());

        for applicant in items {
            if seen.insert(applicant.id.clone()) {
                unique.push(applicant);
            } else {
                duplicates.push(applicant.id);
            }
        }

        (
            Self {
                items: unique,
                has_next,
            },
            duplicates,
        )
    }

    /// 空のページ（次ページなし）
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Applicant] {
        &self.items
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn applicant(id: &str, status: ApplicantStatus) -> Applicant {
        Applicant::from_record(ApplicantRecord {
            id: ApplicationId::new(id).unwrap(),
            name: Some("山田".to_string()),
            phone: Some("010-0000-0000".to_string()),
            bio: None,
            status,
            created_at: None,
        })
    }

    #[rstest]
    #[case(ReviewDecision::Accepted, ApplicantStatus::Accepted)]
    #[case(ReviewDecision::Rejected, ApplicantStatus::Rejected)]
    fn test_pendingから審査結果へ遷移できる(
        #[case] decision: ReviewDecision,
        #[case] expected: ApplicantStatus,
    ) {
        assert_eq!(ApplicantStatus::Pending.apply(decision), Ok(expected));
    }

    #[rstest]
    #[case(ApplicantStatus::Accepted)]
    #[case(ApplicantStatus::Rejected)]
    #[case(ApplicantStatus::Canceled)]
    fn test_終端ステータスからは遷移できない(#[case] from: ApplicantStatus) {
        for decision in ReviewDecision::ALL {
            assert!(matches!(
                from.apply(decision),
                Err(DomainError::InvalidTransition { .. })
            ));
        }
    }

    #[test]
    fn test_不正な遷移のエラーメッセージにステータス名が含まれる() {
        let err = ApplicantStatus::Canceled
            .apply(ReviewDecision::Accepted)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "canceled から accepted への状態遷移はできません"
        );
    }

    #[test]
    fn test_ステータス文字列をパースできる() {
        assert_eq!(
            "pending".parse::<ApplicantStatus>(),
            Ok(ApplicantStatus::Pending)
        );
        assert_eq!(
            "canceled".parse::<ApplicantStatus>(),
            Ok(ApplicantStatus::Canceled)
        );
        assert!("approved".parse::<ApplicantStatus>().is_err());
    }

    #[test]
    fn test_未登録の項目はプレースホルダーになる() {
        let applicant = Applicant::from_record(ApplicantRecord {
            id: ApplicationId::new("a1").unwrap(),
            name: None,
            phone: Some("  ".to_string()),
            bio: None,
            status: ApplicantStatus::Pending,
            created_at: None,
        });

        assert_eq!(applicant.name(), ANONYMOUS_APPLICANT);
        assert_eq!(applicant.phone(), NO_PHONE);
        assert_eq!(applicant.bio(), NO_BIO);
    }

    #[test]
    fn test_審査待ちのみ審査結果を提示する() {
        assert_eq!(
            applicant("a1", ApplicantStatus::Pending).available_decisions(),
            &ReviewDecision::ALL
        );
        assert!(
            applicant("a1", ApplicantStatus::Accepted)
                .available_decisions()
                .is_empty()
        );
        assert!(
            applicant("a1", ApplicantStatus::Canceled)
                .available_decisions()
                .is_empty()
        );
    }

    #[test]
    fn test_decidedはステータスのみを変更する() {
        let before = applicant("a1", ApplicantStatus::Pending);

        let after = before.decided(ReviewDecision::Accepted).unwrap();

        assert_eq!(after.status(), ApplicantStatus::Accepted);
        assert_eq!(after.id(), before.id());
        assert_eq!(after.name(), before.name());
        assert_eq!(after.phone(), before.phone());
        assert_eq!(after.bio(), before.bio());
    }

    #[test]
    fn test_ページ内の重複idは最初の要素のみ残す() {
        let items = vec![
            applicant("a1", ApplicantStatus::Pending),
            applicant("a2", ApplicantStatus::Pending),
            applicant("a1", ApplicantStatus::Accepted),
        ];

        let (page, duplicates) = ApplicantPage::new(items, true);

        assert_eq!(page.items().len(), 2);
        assert_eq!(page.items()[0].status(), ApplicantStatus::Pending);
        assert_eq!(duplicates, vec![ApplicationId::new("a1").unwrap()]);
        assert!(page.has_next());
    }

    #[test]
    fn test_空のページは次ページなし() {
        let page = ApplicantPage::empty();

        assert!(page.items().is_empty());
        assert!(!page.has_next());
    }
}
