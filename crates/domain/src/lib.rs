//! # Julge ドメイン層
//!
//! アルバイトマッチングサービスの応募審査に関わるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **値オブジェクト**: リモートサービスが採番する ID やページサイズを Newtype で表現
//! - **状態遷移**: 応募ステータスの遷移規則をドメイン層に閉じ込める
//! - **純粋関数**: 表示項目の選択は副作用を持たない
//!
//! ## 依存関係の方向
//!
//! ```text
//! recruit → client → domain
//! ```
//!
//! ドメイン層は HTTP クライアントや非同期ランタイムに一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`application`] - 応募者と応募ステータスの状態遷移
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`layout`] - 端末区分と表示項目の選択
//! - [`notice`] - 求人公告
//! - [`pagination`] - オフセットベースのページネーション
//! - [`shop`] / [`user`] - 識別子

#[macro_use]
mod macros;

pub mod application;
pub mod error;
pub mod layout;
pub mod notice;
pub mod pagination;
pub mod shop;
pub mod user;

pub use error::DomainError;
