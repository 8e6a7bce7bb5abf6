//! # 応募履歴
//!
//! 従業員が自分の応募を一覧する画面の表示モデル。
//! 列の表示規則は応募者テーブルと同じ [`visible_fields`] を使う。

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use julge_client::{ApplicationItemDto, UserApplicationClient};
use julge_domain::{
    DomainError,
    application::{ApplicantStatus, ApplicationId},
    layout::{DeviceClass, FieldSpec, visible_fields},
    notice::{Notice, NoticeId},
    pagination::{PageLimit, PaginationCursor},
    user::UserId,
};

use crate::{error::LoadError, notifier::Notifier};

/// 応募履歴の取得が失敗したときに利用者へ表示するメッセージ
pub const HISTORY_LOAD_FAILED_MESSAGE: &str = "応募履歴の読み込み中にエラーが発生しました";

/// 応募履歴テーブルの列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkHistoryColumn {
    Store,
    Period,
    Wage,
    Status,
}

/// 応募履歴テーブルの列定義（表示順）
pub const WORK_HISTORY_COLUMNS: [FieldSpec<WorkHistoryColumn>; 4] = [
    FieldSpec::new(WorkHistoryColumn::Store, "店舗", DeviceClass::Mobile),
    FieldSpec::new(WorkHistoryColumn::Period, "日付", DeviceClass::Tablet),
    FieldSpec::desktop_only(WorkHistoryColumn::Wage, "時給"),
    FieldSpec::new(WorkHistoryColumn::Status, "状態", DeviceClass::Mobile),
];

/// 応募履歴のステータス表示ラベル
pub fn status_label(status: ApplicantStatus) -> &'static str {
    match status {
        ApplicantStatus::Pending => "待機中",
        ApplicantStatus::Accepted => "承認済み",
        ApplicantStatus::Rejected => "拒否",
        ApplicantStatus::Canceled => "キャンセル",
    }
}

/// 時給の表示文字列（3 桁区切り）
pub fn format_wage(hourly_pay: u32) -> String {
    let digits = hourly_pay.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push('円');
    grouped
}

/// 応募履歴の 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkHistoryRow {
    pub id:     ApplicationId,
    pub store:  String,
    /// `YYYY-MM-DD HH:mm~HH:mm N時間`
    pub period: String,
    pub wage:   String,
    pub status: ApplicantStatus,
}

impl WorkHistoryRow {
    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }

    /// 端末区分で表示するセル（見出しと同じ順序）
    pub fn cells(&self, device: DeviceClass) -> Vec<&str> {
        visible_fields(device, &WORK_HISTORY_COLUMNS)
            .into_iter()
            .map(|spec| match spec.key {
                WorkHistoryColumn::Store => self.store.as_str(),
                WorkHistoryColumn::Period => self.period.as_str(),
                WorkHistoryColumn::Wage => self.wage.as_str(),
                WorkHistoryColumn::Status => self.status_label(),
            })
            .collect()
    }
}

/// 端末区分で表示する見出し
pub fn work_history_headers(device: DeviceClass) -> Vec<&'static str> {
    visible_fields(device, &WORK_HISTORY_COLUMNS)
        .into_iter()
        .map(|spec| spec.label)
        .collect()
}

/// 1 ページ分の応募履歴
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkHistoryPage {
    pub rows:   Vec<WorkHistoryRow>,
    pub cursor: PaginationCursor,
}

/// 応募履歴コントローラ
pub struct WorkHistory {
    client:         Arc<dyn UserApplicationClient>,
    notifier:       Arc<dyn Notifier>,
    limit:          PageLimit,
    display_offset: FixedOffset,
}

impl WorkHistory {
    pub fn new(
        client: Arc<dyn UserApplicationClient>,
        notifier: Arc<dyn Notifier>,
        limit: PageLimit,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            client,
            notifier,
            limit,
            display_offset,
        }
    }

    /// 応募履歴を 1 ページ取得する
    ///
    /// 失敗時は通知先にメッセージを送ってエラーを返す。
    pub async fn load(&self, user_id: &UserId, offset: u32) -> Result<WorkHistoryPage, LoadError> {
        tracing::debug!(%user_id, offset, "応募履歴を取得します");

        let response = match self
            .client
            .list_user_applications(user_id, offset, self.limit.get())
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("応募履歴の取得に失敗: {}", e);
                self.notifier.alert(HISTORY_LOAD_FAILED_MESSAGE);
                return Err(LoadError::Api(e));
            }
        };

        let (items, has_next) = response.into_items();
        let rows = items
            .into_iter()
            .filter_map(|dto| {
                let id = dto.id.clone();
                match self.to_row(dto) {
                    Ok(row) => Some(row),
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "不正な応募履歴を読み飛ばします");
                        None
                    }
                }
            })
            .collect();

        Ok(WorkHistoryPage {
            rows,
            cursor: PaginationCursor::new(offset, self.limit, has_next),
        })
    }

    fn to_row(&self, dto: ApplicationItemDto) -> Result<WorkHistoryRow, DomainError> {
        let id = ApplicationId::new(dto.id)?;
        let status = dto.status.parse::<ApplicantStatus>()?;
        let shop = dto
            .shop
            .ok_or_else(|| DomainError::Validation("店舗情報がありません".to_string()))?
            .item;
        let notice = dto
            .notice
            .ok_or_else(|| DomainError::Validation("公告情報がありません".to_string()))?
            .item;

        let starts_at = DateTime::parse_from_rfc3339(&notice.starts_at)
            .map_err(|e| DomainError::Validation(format!("開始日時が不正です: {e}")))?
            .with_timezone(&Utc);
        let notice = Notice::new(
            NoticeId::new(notice.id)?,
            notice.hourly_pay,
            starts_at,
            notice.workhour,
        );

        Ok(WorkHistoryRow {
            id,
            store: shop.name,
            period: notice.work_period(self.display_offset),
            wage: format_wage(notice.hourly_pay()),
            status,
        })
    }
}
