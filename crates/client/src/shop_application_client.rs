//! 雇用主側（店舗・公告の応募管理）の Julge API クライアント

use async_trait::async_trait;
use julge_domain::{
    application::{ApplicationId, ReviewDecision},
    notice::NoticeId,
    shop::ShopId,
};

use super::{
    client_impl::JulgeApiClientImpl,
    error::ApiError,
    response::{handle_empty_response, handle_response},
    types::{ApplicationListResponse, UpdateApplicationRequest},
};

/// 雇用主側の応募管理クライアントトレイト
#[async_trait]
pub trait ShopApplicationClient: Send + Sync {
    /// 公告の応募一覧を取得する
    ///
    /// `GET /shops/{shop_id}/notices/{notice_id}/applications?offset=&limit=` を呼び出す。
    async fn list_notice_applications(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError>;

    /// 応募ステータスを変更する
    ///
    /// `PUT /shops/{shop_id}/notices/{notice_id}/applications/{application_id}` を呼び出す。
    /// 認証トークンが必須。
    async fn update_application_status(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        application_id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<(), ApiError>;
}

#[async_trait]
impl ShopApplicationClient for JulgeApiClientImpl {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(%shop_id, %notice_id, offset = offset, limit = limit)
    )]
    async fn list_notice_applications(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError> {
        let url = format!(
            "{}?offset={}&limit={}",
            self.url(&[
                "shops",
                shop_id.as_str(),
                "notices",
                notice_id.as_str(),
                "applications",
            ]),
            offset,
            limit
        );

        let response = self.authorize(self.client.get(&url)).send().await?;
        handle_response(response).await
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(%shop_id, %notice_id, %application_id, %decision)
    )]
    async fn update_application_status(
        &self,
        shop_id: &ShopId,
        notice_id: &NoticeId,
        application_id: &ApplicationId,
        decision: ReviewDecision,
    ) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let url = self.url(&[
            "shops",
            shop_id.as_str(),
            "notices",
            notice_id.as_str(),
            "applications",
            application_id.as_str(),
        ]);
        let req = UpdateApplicationRequest {
            status: decision.to_string(),
        };

        let response = self
            .client
            .put(&url)
            .bearer_auth(token.expose())
            .json(&req)
            .send()
            .await?;
        handle_empty_response(response).await
    }
}
