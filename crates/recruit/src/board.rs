//! # 応募審査ボード
//!
//! 一覧・状態遷移・ビューポート・応募履歴の各コントローラを 1 つのクライアントと
//! 通知先で組み立て、描画側に表示モデルを渡す。
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use julge_recruit::{NoticeTarget, TracingNotifier, bootstrap};
//!
//! # async fn run(target: NoticeTarget) -> Result<(), Box<dyn std::error::Error>> {
//! let board = bootstrap(Arc::new(TracingNotifier))?;
//! board.open(target).await?;
//! let table = board.table();
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use chrono::FixedOffset;
use julge_client::{ApiError, JulgeApiClient, ShopApplicationClient, UserApplicationClient};
use julge_domain::{
    application::{ApplicationId, ReviewDecision},
    layout::Breakpoints,
    pagination::PageLimit,
};
use julge_shared::observability::{TracingConfig, init_tracing};
use thiserror::Error;

use crate::{
    applicant_list::{ApplicantListController, ListQuery, LoadOutcome, NoticeTarget},
    applicant_table::ApplicantTable,
    config::{ConfigError, RecruitConfig},
    error::{LoadError, TransitionError},
    notifier::Notifier,
    status_transition::StatusTransitionController,
    viewport::Viewport,
    work_history::WorkHistory,
};

/// 起動エラー
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("設定の読み込みに失敗しました: {0}")]
    Config(#[from] ConfigError),

    #[error("API クライアントの構築に失敗しました: {0}")]
    Client(#[from] ApiError),
}

/// 応募審査ボード
pub struct ReviewBoard {
    list:        Arc<ApplicantListController>,
    transitions: StatusTransitionController,
    viewport:    Viewport,
    history:     WorkHistory,
}

impl ReviewBoard {
    pub fn new<C>(
        client: Arc<C>,
        notifier: Arc<dyn Notifier>,
        page_size: PageLimit,
        display_offset: FixedOffset,
        viewport: Viewport,
    ) -> Self
    where
        C: JulgeApiClient + 'static,
    {
        let shop_client: Arc<dyn ShopApplicationClient> = client.clone();
        let user_client: Arc<dyn UserApplicationClient> = client;

        let list = Arc::new(ApplicantListController::new(
            shop_client.clone(),
            notifier.clone(),
            page_size,
        ));
        let transitions =
            StatusTransitionController::new(shop_client, list.clone(), notifier.clone());
        let history = WorkHistory::new(user_client, notifier, page_size, display_offset);

        Self {
            list,
            transitions,
            viewport,
            history,
        }
    }

    /// 設定からボードを組み立てる
    ///
    /// ビューポートは desktop 幅で始まる。
    pub fn from_config(
        config: &RecruitConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let client = Arc::new(config.build_client()?);
        Ok(Self::new(
            client,
            notifier,
            config.page_size,
            config.display_offset,
            Viewport::new(Breakpoints::default(), u32::MAX),
        ))
    }

    /// 公告の応募者一覧を先頭ページから開く
    pub async fn open(&self, target: NoticeTarget) -> Result<LoadOutcome, LoadError> {
        self.list.sync(ListQuery::first_page(target)).await
    }

    /// 行の操作から審査結果を適用する
    pub async fn decide(
        &self,
        id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<(), TransitionError> {
        let (Some(target), Some(applicant)) = (self.list.target(), self.list.find(id)) else {
            return Err(TransitionError::UnknownApplicant(id.clone()));
        };
        self.transitions
            .transition(&target, &applicant, decision)
            .await
    }

    /// 現在の端末区分での応募者テーブル
    pub fn table(&self) -> ApplicantTable {
        ApplicantTable::build(
            &self.list.applicants(),
            self.viewport.device_class(),
            self.list.cursor(),
            |id| self.transitions.is_in_flight(id),
        )
    }

    pub fn list(&self) -> &ApplicantListController {
        &self.list
    }

    pub fn transitions(&self) -> &StatusTransitionController {
        &self.transitions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &WorkHistory {
        &self.history
    }
}

/// 環境変数からボードを起動する
///
/// `.env` の読み込みとトレーシングの初期化を行ってから設定を読む。
pub fn bootstrap(notifier: Arc<dyn Notifier>) -> Result<ReviewBoard, BootstrapError> {
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("julge-recruit");
    if !init_tracing(&tracing_config) {
        tracing::debug!(
            service = %tracing_config.service_name,
            "既存のサブスクライバを使用します"
        );
    }

    let config = RecruitConfig::from_env()?;
    tracing::info!(
        api_url = %config.api_url,
        page_size = config.page_size.get(),
        "応募審査ボードを起動します"
    );

    Ok(ReviewBoard::from_config(&config, notifier)?)
}
