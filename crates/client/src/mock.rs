//! # テスト用モッククライアント
//!
//! コントローラのテストで使用するインメモリの Julge API。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! julge-client = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 呼び出し回数の記録、エラー注入、レスポンスの一時停止（[`Notify`] で再開）に対応する。

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        Arc,
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use julge_domain::{
    application::{ApplicationId, ReviewDecision},
    notice::NoticeId,
    shop::ShopId,
    user::UserId,
};
use tokio::sync::Notify;

use crate::{
    ApiError,
    ApplicationItemDto,
    ApplicationListResponse,
    Envelope,
    NoticeDto,
    ShopApplicationClient,
    ShopDto,
    UserApplicationClient,
    UserDto,
};

type NoticeKey = (String, String);

/// 応募者一覧用の応募 DTO を作成する
pub fn applicant_dto(id: &str, name: Option<&str>, status: &str) -> ApplicationItemDto {
    ApplicationItemDto {
        id:         id.to_string(),
        status:     status.to_string(),
        created_at: Some("2025-01-01T00:00:00.000Z".to_string()),
        user:       Some(Envelope {
            item: UserDto {
                id:    format!("user-{id}"),
                email: Some(format!("{id}@example.com")),
                name:  name.map(str::to_string),
                phone: None,
                bio:   None,
            },
        }),
        shop:       None,
        notice:     None,
    }
}

/// 応募履歴用の応募 DTO を作成する
pub fn work_history_dto(
    id: &str,
    shop_name: &str,
    hourly_pay: u32,
    starts_at: &str,
    workhour: u32,
    status: &str,
) -> ApplicationItemDto {
    ApplicationItemDto {
        id:         id.to_string(),
        status:     status.to_string(),
        created_at: None,
        user:       None,
        shop:       Some(Envelope {
            item: ShopDto {
                id:   format!("shop-{id}"),
                name: shop_name.to_string(),
            },
        }),
        notice:     Some(Envelope {
            item: NoticeDto {
                id: format!("notice-{id}"),
                hourly_pay,
                starts_at: starts_at.to_string(),
                workhour,
                description: None,
                closed: false,
            },
        }),
    }
}

#[derive(Default)]
struct MockState {
    notice_applications: HashMap<NoticeKey, Vec<ApplicationItemDto>>,
    user_applications:   HashMap<String, Vec<ApplicationItemDto>>,
    list_error:          Option<ApiError>,
    update_error:        Option<ApiError>,
    omit_items:          bool,
    list_holds:          VecDeque<Arc<Notify>>,
    update_holds:        VecDeque<Arc<Notify>>,
}

/// インメモリの Julge API モック
#[derive(Clone, Default)]
pub struct MockJulgeApiClient {
    state:        Arc<Mutex<MockState>>,
    list_calls:   Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl MockJulgeApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_notice_application(&self, shop_id: &str, notice_id: &str, dto: ApplicationItemDto) {
        self.state
            .lock()
            .unwrap()
            .notice_applications
            .entry((shop_id.to_string(), notice_id.to_string()))
            .or_default()
            .push(dto);
    }

    pub fn add_user_application(&self, user_id: &str, dto: ApplicationItemDto) {
        self.state
            .lock()
            .unwrap()
            .user_applications
            .entry(user_id.to_string())
            .or_default()
            .push(dto);
    }

    /// 一覧取得が返すエラーを設定する（`None` で解除）
    pub fn set_list_error(&self, error: Option<ApiError>) {
        self.state.lock().unwrap().list_error = error;
    }

    /// ステータス変更が返すエラーを設定する（`None` で解除）
    pub fn set_update_error(&self, error: Option<ApiError>) {
        self.state.lock().unwrap().update_error = error;
    }

    /// 一覧レスポンスから `items` を欠落させる
    pub fn set_omit_items(&self, omit: bool) {
        self.state.lock().unwrap().omit_items = omit;
    }

    /// 次の一覧取得を、返された `Notify` が通知されるまで止める
    pub fn hold_next_list(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.state
            .lock()
            .unwrap()
            .list_holds
            .push_back(notify.clone());
        notify
    }

    /// 次のステータス変更を、返された `Notify` が通知されるまで止める
    pub fn hold_next_update(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.state
            .lock()
            .unwrap()
            .update_holds
            .push_back(notify.clone());
        notify
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// リモート側に保存されている応募ステータス
    pub fn stored_status(&self, shop_id: &str, notice_id: &str, application_id: &str) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .notice_applications
            .get(&(shop_id.to_string(), notice_id.to_string()))
            .and_then(|items| items.iter().find(|dto| dto.id == application_id))
            .map(|dto| dto.status.clone())
    }

    fn page(
        items: Option<&Vec<ApplicationItemDto>>,
        offset: u32,
        limit: u32,
        omit_items: bool,
    ) -> ApplicationListResponse {
        let all = items.map(Vec::as_slice).unwrap_or_default();
        let start = (offset as usize).min(all.len());
        let end = start.saturating_add(limit as usize).min(all.len());
        let page: Vec<_> = all[start..end]
            .iter()
            .cloned()
            .map(|item| Envelope { item })
            .collect();

        ApplicationListResponse {
            offset,
            limit,
            count: page.len() as u32,
            has_next: end < all.len(),
            items: (!omit_items).then_some(page),
        }
    }
}

#[async_trait]
impl ShopApplicationClient for MockJulgeApiClient {
    async fn list_notice_applications(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let hold = self.state.lock().unwrap().list_holds.pop_front();
        if let Some(hold) = hold {
            hold.notified().await;
        }

        let state = self.state.lock().unwrap();
        if let Some(error) = &state.list_error {
            return Err(error.clone());
        }
        let key = (shop_id.to_string(), notice_id.to_string());
        Ok(Self::page(
            state.notice_applications.get(&key),
            offset,
            limit,
            state.omit_items,
        ))
    }

    async fn update_application_status(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        application_id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<(), ApiError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let hold = self.state.lock().unwrap().update_holds.pop_front();
        if let Some(hold) = hold {
            hold.notified().await;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(error) = &state.update_error {
            return Err(error.clone());
        }
        let key = (shop_id.to_string(), notice_id.to_string());
        let dto = state
            .notice_applications
            .get_mut(&key)
            .and_then(|items| items.iter_mut().find(|dto| dto.id == application_id.as_str()))
            .ok_or_else(|| ApiError::NotFound("存在しない応募です".to_string()))?;
        dto.status = decision.to_string();
        Ok(())
    }
}

#[async_trait]
impl UserApplicationClient for MockJulgeApiClient {
    async fn list_user_applications(
        &self,
        user_id: &UserId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let state = self.state.lock().unwrap();
        if let Some(error) = &state.list_error {
            return Err(error.clone());
        }
        Ok(Self::page(
            state.user_applications.get(user_id.as_str()),
            offset,
            limit,
            state.omit_items,
        ))
    }
}
