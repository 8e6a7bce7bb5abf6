//! # julge-recruit
//!
//! アルバイト募集の応募者審査ワークフロー。
//!
//! ## 構成
//!
//! - [`applicant_list`]: 公告ごとの応募者一覧の取得・ページ送り・表示状態の所有
//! - [`status_transition`]: 審査結果（承認・拒否）の送信と一覧への反映
//! - [`viewport`]: ビューポート幅から端末区分を導出するシグナル
//! - [`applicant_table`]: 応募者一覧の不変な表示モデル
//! - [`work_history`]: 従業員側の応募履歴
//! - [`board`]: 上記を 1 つのクライアントで組み立てる入口
//!
//! 失敗は各コントローラの境界で [`Notifier`] に通知し、エラーとして呼び出し元に返す。

pub mod applicant_list;
pub mod applicant_table;
pub mod board;
pub mod config;
pub mod error;
pub mod notifier;
pub mod status_transition;
pub mod viewport;
pub mod work_history;

pub use applicant_list::{ApplicantListController, ListQuery, LoadOutcome, NoticeTarget};
pub use applicant_table::{ApplicantTable, Cell, RowAction};
pub use board::{BootstrapError, ReviewBoard, bootstrap};
pub use config::{ConfigError, RecruitConfig};
pub use error::{LoadError, TransitionError};
pub use notifier::{MemoryNotifier, Notifier, TracingNotifier};
pub use status_transition::StatusTransitionController;
pub use viewport::Viewport;
pub use work_history::{WorkHistory, WorkHistoryRow};
