//! # 求人公告
//!
//! 店舗が掲載する求人公告。時給・開始日時・勤務時間を持つ。

use chrono::{DateTime, Duration, FixedOffset, Utc};

define_opaque_id! {
    /// 求人公告 ID
    pub struct NoticeId("公告 ID");
}

/// 求人公告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id:         NoticeId,
    hourly_pay: u32,
    starts_at:  DateTime<Utc>,
    workhour:   u32,
}

impl Notice {
    pub fn new(id: NoticeId, hourly_pay: u32, starts_at: DateTime<Utc>, workhour: u32) -> Self {
        Self {
            id,
            hourly_pay,
            starts_at,
            workhour,
        }
    }

    pub fn id(&self) -> &NoticeId {
        &self.id
    }

    pub fn hourly_pay(&self) -> u32 {
        self.hourly_pay
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    pub fn workhour(&self) -> u32 {
        self.workhour
    }

    /// 勤務終了日時
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.starts_at + Duration::hours(i64::from(self.workhour))
    }

    /// 勤務期間の表示文字列
    ///
    /// `YYYY-MM-DD HH:mm~HH:mm N時間` 形式で、`offset` のタイムゾーンで表示する。
    ///
    /// ```rust
    /// use chrono::{FixedOffset, TimeZone, Utc};
    /// use julge_domain::notice::{Notice, NoticeId};
    ///
    /// let notice = Notice::new(
    ///     NoticeId::new("n1").unwrap(),
    ///     10_000,
    ///     Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
    ///     3,
    /// );
    /// let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    /// assert_eq!(notice.work_period(kst), "2025-07-01 18:00~21:00 3時間");
    /// ```
    pub fn work_period(&self, offset: FixedOffset) -> String {
        let start = self.starts_at.with_timezone(&offset);
        let end = self.ends_at().with_timezone(&offset);
        format!(
            "{}~{} {}時間",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%H:%M"),
            self.workhour
        )
    }
}
