//! テスト共通フィクスチャ
//!
//! 応募審査の統合テストで共通利用する公告 ID・モック API・ボード生成ヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::sync::Arc;

use chrono::FixedOffset;
use julge_client::mock::{MockJulgeApiClient, applicant_dto};
use julge_domain::{
    application::ApplicationId,
    layout::Breakpoints,
    notice::NoticeId,
    pagination::PageLimit,
    shop::ShopId,
};
use julge_recruit::{MemoryNotifier, NoticeTarget, ReviewBoard, Viewport};

pub const SHOP: &str = "shop1";
pub const NOTICE: &str = "notice1";

/// テスト対象の公告
pub fn target() -> NoticeTarget {
    NoticeTarget::new(ShopId::new(SHOP).unwrap(), NoticeId::new(NOTICE).unwrap())
}

pub fn application_id(value: &str) -> ApplicationId {
    ApplicationId::new(value).unwrap()
}

/// 審査待ちの応募者を `count` 件登録したモック API
///
/// 応募 ID は `a1`, `a2`, ... の連番。
pub fn seeded_api(count: usize) -> MockJulgeApiClient {
    let mock = MockJulgeApiClient::new();
    for i in 1..=count {
        let name = format!("応募者{i}");
        mock.add_notice_application(
            SHOP,
            NOTICE,
            applicant_dto(&format!("a{i}"), Some(&name), "pending"),
        );
    }
    mock
}

/// ページサイズ 5、desktop 幅のボード
pub fn board(mock: &MockJulgeApiClient) -> (ReviewBoard, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let board = ReviewBoard::new(
        Arc::new(mock.clone()),
        notifier.clone(),
        PageLimit::default(),
        FixedOffset::east_opt(9 * 3600).unwrap(),
        Viewport::new(Breakpoints::default(), 1280),
    );
    (board, notifier)
}

/// 表示中の応募 ID（表示順）
pub fn visible_ids(board: &ReviewBoard) -> Vec<String> {
    board
        .list()
        .applicants()
        .iter()
        .map(|applicant| applicant.id().to_string())
        .collect()
}
