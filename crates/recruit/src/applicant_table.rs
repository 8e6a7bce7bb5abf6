//! # 応募者テーブルの表示モデル
//!
//! 応募者一覧のスナップショットと端末区分から、描画側に渡す不変の行データを組み立てる。
//! 行は状態を持たない。操作は [`RowAction`] で表し、結果は遷移コントローラを経由して
//! 一覧コントローラに反映される。

use julge_domain::{
    application::{Applicant, ApplicantStatus, ApplicationId, ReviewDecision},
    layout::{DeviceClass, FieldSpec, visible_fields},
    pagination::PaginationCursor,
};

/// 応募者テーブルの列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantColumn {
    Name,
    Bio,
    Phone,
    Status,
}

/// 応募者テーブルの列定義（表示順）
pub const APPLICANT_COLUMNS: [FieldSpec<ApplicantColumn>; 4] = [
    FieldSpec::new(ApplicantColumn::Name, "申請者", DeviceClass::Mobile),
    FieldSpec::new(ApplicantColumn::Bio, "紹介", DeviceClass::Tablet),
    FieldSpec::desktop_only(ApplicantColumn::Phone, "電話番号"),
    FieldSpec::new(ApplicantColumn::Status, "状態", DeviceClass::Mobile),
];

/// 行の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// 審査待ち。`enabled` が `false` の間は状態変更が処理中
    Decide {
        decisions: &'static [ReviewDecision],
        enabled:   bool,
    },
    /// 審査済み。操作は提示しない
    Settled {
        status: ApplicantStatus,
        label:  &'static str,
    },
}

impl RowAction {
    fn for_applicant(applicant: &Applicant, in_flight: bool) -> Self {
        if applicant.is_pending() {
            Self::Decide {
                decisions: applicant.available_decisions(),
                enabled:   !in_flight,
            }
        } else {
            Self::Settled {
                status: applicant.status(),
                label:  settled_label(applicant.status()),
            }
        }
    }
}

/// 審査済みステータスの表示ラベル
pub fn settled_label(status: ApplicantStatus) -> &'static str {
    match status {
        ApplicantStatus::Pending => "審査待ち",
        ApplicantStatus::Accepted => "承認済み",
        ApplicantStatus::Rejected => "拒否済み",
        ApplicantStatus::Canceled => "キャンセル済み",
    }
}

/// セル
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Action(RowAction),
}

/// 1 応募者分の行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRow {
    pub id:    ApplicationId,
    /// 見出しと同じ順序のセル
    pub cells: Vec<Cell>,
}

impl ApplicantRow {
    /// 行の操作
    pub fn action(&self) -> Option<&RowAction> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Action(action) => Some(action),
            Cell::Text(_) => None,
        })
    }
}

/// ページ送りの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    /// 1 始まりのページ番号
    pub page:         u32,
    pub has_previous: bool,
    pub has_next:     bool,
}

impl From<PaginationCursor> for PaginationView {
    fn from(cursor: PaginationCursor) -> Self {
        Self {
            page:         cursor.page_number(),
            has_previous: cursor.previous_offset().is_some(),
            has_next:     cursor.has_next(),
        }
    }
}

/// 応募者テーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantTable {
    pub device:     DeviceClass,
    pub headers:    Vec<&'static str>,
    pub rows:       Vec<ApplicantRow>,
    pub pagination: PaginationView,
}

impl ApplicantTable {
    /// 表示モデルを組み立てる
    ///
    /// `is_in_flight` が `true` を返す応募者の操作は無効化する。
    pub fn build(
        applicants: &[Applicant],
        device: DeviceClass,
        cursor: PaginationCursor,
        is_in_flight: impl Fn(&ApplicationId) -> bool,
    ) -> Self {
        let columns = visible_fields(device, &APPLICANT_COLUMNS);
        let headers = columns.iter().map(|spec| spec.label).collect();
        let rows = applicants
            .iter()
            .map(|applicant| ApplicantRow {
                id:    applicant.id().clone(),
                cells: columns
                    .iter()
                    .map(|spec| cell(applicant, spec.key, &is_in_flight))
                    .collect(),
            })
            .collect();

        Self {
            device,
            headers,
            rows,
            pagination: cursor.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn cell(
    applicant: &Applicant,
    column: ApplicantColumn,
    is_in_flight: &impl Fn(&ApplicationId) -> bool,
) -> Cell {
    match column {
        ApplicantColumn::Name => Cell::Text(applicant.name().to_string()),
        ApplicantColumn::Bio => Cell::Text(applicant.bio().to_string()),
        ApplicantColumn::Phone => Cell::Text(applicant.phone().to_string()),
        ApplicantColumn::Status => Cell::Action(RowAction::for_applicant(
            applicant,
            is_in_flight(applicant.id()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use julge_domain::{
        application::{ApplicantRecord, NO_BIO, NO_PHONE},
        pagination::PageLimit,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn applicant(id: &str, status: ApplicantStatus) -> Applicant {
        Applicant::from_record(ApplicantRecord {
            id: ApplicationId::new(id).unwrap(),
            name: Some(format!("応募者{id}")),
            phone: None,
            bio: None,
            status,
            created_at: None,
        })
    }

    fn cursor() -> PaginationCursor {
        PaginationCursor::new(5, PageLimit::default(), true)
    }

    #[rstest]
    #[case(DeviceClass::Mobile, vec!["申請者", "状態"])]
    #[case(DeviceClass::Tablet, vec!["申請者", "紹介", "状態"])]
    #[case(DeviceClass::Desktop, vec!["申請者", "紹介", "電話番号", "状態"])]
    fn test_端末区分ごとの見出し(#[case] device: DeviceClass, #[case] expected: Vec<&str>) {
        let table = ApplicantTable::build(&[], device, cursor(), |_| false);

        assert_eq!(table.headers, expected);
        assert!(table.is_empty());
    }

    #[test]
    fn test_desktopでは全項目を表示する() {
        let applicants = [applicant("a1", ApplicantStatus::Pending)];

        let table = ApplicantTable::build(&applicants, DeviceClass::Desktop, cursor(), |_| false);

        assert_eq!(
            table.rows[0].cells,
            vec![
                Cell::Text("応募者a1".to_string()),
                Cell::Text(NO_BIO.to_string()),
                Cell::Text(NO_PHONE.to_string()),
                Cell::Action(RowAction::Decide {
                    decisions: &ReviewDecision::ALL,
                    enabled:   true,
                }),
            ]
        );
    }

    #[test]
    fn test_審査済みの応募者は操作を提示しない() {
        let applicants = [
            applicant("a1", ApplicantStatus::Accepted),
            applicant("a2", ApplicantStatus::Rejected),
            applicant("a3", ApplicantStatus::Canceled),
        ];

        let table = ApplicantTable::build(&applicants, DeviceClass::Mobile, cursor(), |_| false);

        let labels: Vec<_> = table
            .rows
            .iter()
            .map(|row| match row.action() {
                Some(RowAction::Settled { label, .. }) => *label,
                other => panic!("審査済みであること: {other:?}"),
            })
            .collect();
        assert_eq!(labels, vec!["承認済み", "拒否済み", "キャンセル済み"]);
    }

    #[test]
    fn test_処理中の応募者の操作は無効化する() {
        let applicants = [
            applicant("a1", ApplicantStatus::Pending),
            applicant("a2", ApplicantStatus::Pending),
        ];
        let busy = ApplicationId::new("a1").unwrap();

        let table =
            ApplicantTable::build(&applicants, DeviceClass::Mobile, cursor(), |id| *id == busy);

        assert!(matches!(
            table.rows[0].action(),
            Some(RowAction::Decide { enabled: false, .. })
        ));
        assert!(matches!(
            table.rows[1].action(),
            Some(RowAction::Decide { enabled: true, .. })
        ));
    }

    #[test]
    fn test_ページ送りの表示状態() {
        let table = ApplicantTable::build(&[], DeviceClass::Mobile, cursor(), |_| false);

        assert_eq!(
            table.pagination,
            PaginationView {
                page:         2,
                has_previous: true,
                has_next:     true,
            }
        );
    }
}
