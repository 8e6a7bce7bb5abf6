//! # 応募者一覧コントローラ
//!
//! 公告ごとの応募者一覧をページ単位で取得し、表示用の応募者に変換して保持する。
//!
//! ## 状態の所有
//!
//! 応募者の表示状態（ステータスを含む）はこのコントローラだけが持つ。
//! 行ごとの表示部品は不変のスナップショットを受け取り、状態変更は
//! [`ApplicantListController::apply_decision`] を通じてのみ反映される。
//!
//! ## 古いレスポンスの破棄
//!
//! 取得要求ごとに世代番号を振り、完了時点で最新の要求でなければ結果を捨てる。
//! ページ送りを連打しても、先に出した要求の遅延レスポンスが表示を上書きしない。

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use julge_client::{ApplicationItemDto, ShopApplicationClient};
use julge_domain::{
    DomainError,
    application::{
        Applicant,
        ApplicantPage,
        ApplicantRecord,
        ApplicantStatus,
        ApplicationId,
        ReviewDecision,
    },
    notice::NoticeId,
    pagination::{PageLimit, PaginationCursor},
    shop::ShopId,
};

use crate::{error::LoadError, notifier::Notifier};

/// 応募者一覧の取得対象（店舗 + 公告）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoticeTarget {
    pub shop_id:   ShopId,
    pub notice_id: NoticeId,
}

impl NoticeTarget {
    pub fn new(shop_id: ShopId, notice_id: NoticeId) -> Self {
        Self { shop_id, notice_id }
    }
}

/// 一覧取得の入力
///
/// この値が変わったときだけ再取得する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub target: NoticeTarget,
    pub offset: u32,
}

impl ListQuery {
    pub fn new(target: NoticeTarget, offset: u32) -> Self {
        Self { target, offset }
    }

    /// 先頭ページの要求
    pub fn first_page(target: NoticeTarget) -> Self {
        Self::new(target, 0)
    }
}

/// 一覧取得の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 取得したページで表示を置き換えた
    Applied(ApplicantPage),
    /// より新しい要求があったため結果を破棄した
    Superseded,
    /// 入力が変わっていない、または移動先のページがないため取得しなかった
    Unchanged,
}

#[derive(Debug, Default)]
struct ListState {
    /// 最後に要求した入力
    requested:  Option<ListQuery>,
    /// 最後の要求が失敗したか
    failed:     bool,
    /// 要求ごとに増える世代番号
    generation: u64,
    /// 現在表示している応募者の取得元
    loaded:     Option<ListQuery>,
    applicants: Vec<Applicant>,
    has_next:   bool,
}

/// 応募者一覧コントローラ
pub struct ApplicantListController {
    client:   Arc<dyn ShopApplicationClient>,
    notifier: Arc<dyn Notifier>,
    limit:    PageLimit,
    state:    Mutex<ListState>,
}

impl ApplicantListController {
    pub fn new(
        client: Arc<dyn ShopApplicationClient>,
        notifier: Arc<dyn Notifier>,
        limit: PageLimit,
    ) -> Self {
        Self {
            client,
            notifier,
            limit,
            state: Mutex::new(ListState::default()),
        }
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    /// 指定したページを取得し、成功すれば表示中の応募者を丸ごと置き換える
    ///
    /// 1 回の呼び出しにつき必ず 1 回だけリモートに問い合わせる。
    /// 失敗時は表示中の応募者を変更せず、通知先にメッセージを送ってエラーを返す。
    /// 自動再試行はしない。
    pub async fn load(&self, query: ListQuery) -> Result<LoadOutcome, LoadError> {
        let generation = {
            let mut state = self.lock_state();
            state.generation += 1;
            state.requested = Some(query.clone());
            state.failed = false;
            state.generation
        };

        tracing::debug!(
            shop_id = %query.target.shop_id,
            notice_id = %query.target.notice_id,
            offset = query.offset,
            generation,
            "応募者一覧を取得します"
        );

        let result = self
            .client
            .list_notice_applications(
                &query.target.shop_id,
                &query.target.notice_id,
                query.offset,
                self.limit.get(),
            )
            .await;

        match result {
            Ok(response) => {
                let (items, has_next) = response.into_items();
                let page = to_page(items, has_next);

                let mut state = self.lock_state();
                if state.generation != generation {
                    tracing::debug!(generation, "より新しい要求があるため取得結果を破棄します");
                    return Ok(LoadOutcome::Superseded);
                }
                state.applicants = page.items().to_vec();
                state.has_next = page.has_next();
                state.loaded = Some(query);
                Ok(LoadOutcome::Applied(page))
            }
            Err(e) => {
                {
                    let mut state = self.lock_state();
                    if state.generation != generation {
                        tracing::debug!(generation, error = %e, "破棄済みの要求が失敗しました");
                        return Ok(LoadOutcome::Superseded);
                    }
                    state.failed = true;
                }
                tracing::error!("応募者一覧の取得に失敗: {}", e);
                let err = LoadError::Api(e);
                self.notifier.alert(&err.user_message());
                Err(err)
            }
        }
    }

    /// 入力が前回の要求から変わった場合だけ取得する
    ///
    /// 同じ入力での再呼び出しはリモートに問い合わせない。
    /// ただし前回の要求が失敗していれば、同じ入力でも再取得する。
    pub async fn sync(&self, query: ListQuery) -> Result<LoadOutcome, LoadError> {
        {
            let state = self.lock_state();
            if !state.failed && state.requested.as_ref() == Some(&query) {
                return Ok(LoadOutcome::Unchanged);
            }
        }
        self.load(query).await
    }

    /// 最後に要求した入力で再取得する
    pub async fn reload(&self) -> Result<LoadOutcome, LoadError> {
        let query = self.lock_state().requested.clone().ok_or(LoadError::NoQuery)?;
        self.load(query).await
    }

    /// 次のページへ移動する
    ///
    /// 次ページがない場合は取得せずに `Unchanged` を返す。
    pub async fn next_page(&self) -> Result<LoadOutcome, LoadError> {
        let (target, cursor) = self.current_target_and_cursor()?;
        match cursor.next_offset() {
            Some(offset) => self.sync(ListQuery::new(target, offset)).await,
            None => Ok(LoadOutcome::Unchanged),
        }
    }

    /// 前のページへ移動する
    ///
    /// 先頭ページでは取得せずに `Unchanged` を返す。
    pub async fn previous_page(&self) -> Result<LoadOutcome, LoadError> {
        let (target, cursor) = self.current_target_and_cursor()?;
        match cursor.previous_offset() {
            Some(offset) => self.sync(ListQuery::new(target, offset)).await,
            None => Ok(LoadOutcome::Unchanged),
        }
    }

    /// 1 始まりのページ番号へ移動する
    pub async fn go_to_page(&self, page_number: u32) -> Result<LoadOutcome, LoadError> {
        let (target, _) = self.current_target_and_cursor()?;
        let offset = PaginationCursor::offset_of_page(self.limit, page_number)?;
        self.sync(ListQuery::new(target, offset)).await
    }

    /// 表示中のページのカーソル
    pub fn cursor(&self) -> PaginationCursor {
        let state = self.lock_state();
        match &state.loaded {
            Some(query) => PaginationCursor::new(query.offset, self.limit, state.has_next),
            None => PaginationCursor::first(self.limit),
        }
    }

    /// 表示中の取得対象
    pub fn target(&self) -> Option<NoticeTarget> {
        let state = self.lock_state();
        state
            .loaded
            .as_ref()
            .or(state.requested.as_ref())
            .map(|query| query.target.clone())
    }

    /// 表示中の応募者のスナップショット
    pub fn applicants(&self) -> Vec<Applicant> {
        self.lock_state().applicants.clone()
    }

    /// 表示中の応募者を ID で探す
    pub fn find(&self, id: &ApplicationId) -> Option<Applicant> {
        self.lock_state()
            .applicants
            .iter()
            .find(|applicant| applicant.id() == id)
            .cloned()
    }

    /// 表示中の応募者のステータス
    pub fn status_of(&self, id: &ApplicationId) -> Option<ApplicantStatus> {
        self.find(id).map(|applicant| applicant.status())
    }

    /// 審査結果を表示中の応募者に反映する
    ///
    /// 審査待ちの応募者だけを更新し、ステータス以外は変更しない。
    /// 終端ステータスの応募者は巻き戻さない。反映した場合は `true` を返す。
    pub fn apply_decision(&self, id: &ApplicationId, decision: ReviewDecision) -> bool {
        let mut state = self.lock_state();
        let Some(slot) = state
            .applicants
            .iter_mut()
            .find(|applicant| applicant.id() == id)
        else {
            return false;
        };

        match slot.decided(decision) {
            Ok(updated) => {
                *slot = updated;
                true
            }
            Err(e) => {
                tracing::debug!(%id, error = %e, "審査結果を反映しませんでした");
                false
            }
        }
    }

    fn current_target_and_cursor(&self) -> Result<(NoticeTarget, PaginationCursor), LoadError> {
        let target = self.target().ok_or(LoadError::NoQuery)?;
        Ok((target, self.cursor()))
    }

    fn lock_state(&self) -> MutexGuard<'_, ListState> {
        // ロック中にパニックしうる処理はないため、ポイズンされても状態は整合している
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// リモートの応募レコードを表示用のページに変換する
///
/// ID やステータスが不正なレコードは警告を出して読み飛ばす。
fn to_page(items: Vec<ApplicationItemDto>, has_next: bool) -> ApplicantPage {
    let applicants = items
        .into_iter()
        .filter_map(|dto| {
            let id = dto.id.clone();
            match to_applicant(dto) {
                Ok(applicant) => Some(applicant),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "不正な応募レコードを読み飛ばします");
                    None
                }
            }
        })
        .collect();

    let (page, duplicates) = ApplicantPage::new(applicants, has_next);
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "重複した応募 ID を除外しました");
    }
    page
}

fn to_applicant(dto: ApplicationItemDto) -> Result<Applicant, DomainError> {
    let id = ApplicationId::new(dto.id)?;
    let status = dto.status.parse::<ApplicantStatus>()?;
    let created_at = dto
        .created_at
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.with_timezone(&Utc));
    let user = dto.user.map(|envelope| envelope.item);

    Ok(Applicant::from_record(ApplicantRecord {
        id,
        name: user.as_ref().and_then(|u| u.name.clone()),
        phone: user.as_ref().and_then(|u| u.phone.clone()),
        bio: user.and_then(|u| u.bio),
        status,
        created_at,
    }))
}
