//! # 応募ステータス遷移コントローラ
//!
//! 雇用主の審査結果（承認・拒否）をリモートに送り、成功したら
//! 応募者一覧コントローラの表示状態に反映する。
//!
//! ## 同一応募者の多重実行防止
//!
//! 応募者ごとに処理中フラグを持ち、処理中の応募者への 2 回目の要求は
//! ネットワークに出さずに拒否する。別の応募者への要求は互いに独立して並行実行できる。

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

use julge_client::ShopApplicationClient;
use julge_domain::application::{Applicant, ApplicationId, ReviewDecision};

use crate::{
    applicant_list::{ApplicantListController, NoticeTarget},
    error::TransitionError,
    notifier::Notifier,
};

type InFlightSet = Arc<Mutex<HashSet<ApplicationId>>>;

/// 処理中フラグのガード
///
/// ドロップ時にフラグを下ろすため、成功・失敗・future の破棄のいずれでも解放される。
struct InFlightGuard {
    set: InFlightSet,
    id:  ApplicationId,
}

impl InFlightGuard {
    fn acquire(set: &InFlightSet, id: &ApplicationId) -> Option<Self> {
        let inserted = lock(set).insert(id.clone());
        inserted.then(|| Self {
            set: set.clone(),
            id:  id.clone(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock(&self.set).remove(&self.id);
    }
}

fn lock(set: &InFlightSet) -> MutexGuard<'_, HashSet<ApplicationId>> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 応募ステータス遷移コントローラ
pub struct StatusTransitionController {
    client:    Arc<dyn ShopApplicationClient>,
    list:      Arc<ApplicantListController>,
    notifier:  Arc<dyn Notifier>,
    in_flight: InFlightSet,
}

impl StatusTransitionController {
    pub fn new(
        client: Arc<dyn ShopApplicationClient>,
        list: Arc<ApplicantListController>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            client,
            list,
            notifier,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// 応募者に審査結果を適用する
    ///
    /// # 事前条件
    ///
    /// 応募者が審査待ちであること。渡されたレコードと一覧の表示状態の
    /// どちらかが終端ステータスなら、送信せずに `TransitionError::NotPending` を返す。
    /// 同じ応募者の要求が処理中なら、事前条件より先に `TransitionError::InFlight` を返す。
    ///
    /// # 成功時
    ///
    /// 一覧の表示状態のステータスだけを `decision` に更新する。
    ///
    /// # 失敗時
    ///
    /// 表示状態は審査待ちのまま変更せず、通知先にメッセージを送ってエラーを返す。
    /// 自動再試行はしない。
    pub async fn transition(
        &self,
        target: &NoticeTarget,
        applicant: &Applicant,
        decision: ReviewDecision,
    ) -> Result<(), TransitionError> {
        let id = applicant.id();

        // 先行の要求は一覧への反映後にフラグを下ろす。事前条件はフラグを立ててから確認する
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight, id) else {
            tracing::debug!(%id, "処理中の応募者への遷移要求を拒否しました");
            return Err(TransitionError::InFlight(id.clone()));
        };

        let current = self.list.status_of(id).unwrap_or(applicant.status());
        for status in [applicant.status(), current] {
            if status.is_terminal() {
                tracing::debug!(%id, %status, "審査待ちでない応募者への遷移要求を拒否しました");
                return Err(TransitionError::NotPending {
                    id: id.clone(),
                    status,
                });
            }
        }

        let result = self
            .client
            .update_application_status(&target.shop_id, &target.notice_id, id, decision)
            .await;

        match result {
            Ok(()) => {
                self.list.apply_decision(id, decision);
                tracing::info!(%id, %decision, "応募ステータスを変更しました");
                Ok(())
            }
            Err(e) => {
                tracing::error!("応募ステータスの変更に失敗: {}", e);
                let err = TransitionError::Api(e);
                self.notifier.alert(&err.user_message());
                Err(err)
            }
        }
    }

    /// 応募者の状態変更が処理中かどうか
    ///
    /// 処理中の応募者の操作ボタンは無効化する。
    pub fn is_in_flight(&self, id: &ApplicationId) -> bool {
        lock(&self.in_flight).contains(id)
    }
}
