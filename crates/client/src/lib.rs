//! # Julge API クライアント
//!
//! アルバイトマッチングサービスのリモート API との通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /shops/{shop_id}/notices/{notice_id}/applications` - 公告の応募一覧
//! - `PUT /shops/{shop_id}/notices/{notice_id}/applications/{application_id}` - 応募ステータス変更
//! - `GET /users/{user_id}/applications` - ユーザーの応募履歴
//!
//! ## 認証
//!
//! 認証トークン（[`BearerToken`]）はクライアント生成時に注入する。
//! 認証必須の操作でトークンが未設定の場合、リクエストは送信されない。

mod auth;
mod client_impl;
mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
mod response;
mod shop_application_client;
mod types;
mod user_application_client;

pub use auth::BearerToken;
pub use client_impl::{JulgeApiClient, JulgeApiClientImpl};
pub use error::ApiError;
pub use shop_application_client::ShopApplicationClient;
pub use types::{
    ApplicationItemDto,
    ApplicationListResponse,
    Envelope,
    NoticeDto,
    ShopDto,
    UpdateApplicationRequest,
    UserDto,
};
pub use user_application_client::UserApplicationClient;
