//! 従業員側（自分の応募履歴）の Julge API クライアント

use async_trait::async_trait;
use julge_domain::user::UserId;

use super::{
    client_impl::JulgeApiClientImpl,
    error::ApiError,
    response::handle_response,
    types::ApplicationListResponse,
};

/// 従業員側の応募履歴クライアントトレイト
#[async_trait]
pub trait UserApplicationClient: Send + Sync {
    /// ユーザーの応募一覧を取得する
    ///
    /// `GET /users/{user_id}/applications?offset=&limit=` を呼び出す。
    /// 認証トークンが必須。
    async fn list_user_applications(
        &self,
        user_id: &UserId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError>;
}

#[async_trait]
impl UserApplicationClient for JulgeApiClientImpl {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(%user_id, offset = offset, limit = limit)
    )]
    async fn list_user_applications(
        &self,
        user_id: &UserId,
        offset: u32,
        limit: u32,
    ) -> Result<ApplicationListResponse, ApiError> {
        let token = self.require_token()?;
        let url = format!(
            "{}?offset={}&limit={}",
            self.url(&["users", user_id.as_str(), "applications"]),
            offset,
            limit
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await?;
        handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_トークンなしの応募履歴取得は送信せずにエラー() {
        let client = JulgeApiClientImpl::new("http://127.0.0.1:9", Duration::from_millis(50)).unwrap();

        let result = client
            .list_user_applications(&UserId::new("u1").unwrap(), 0, 10)
            .await;

        assert!(matches!(result, Err(ApiError::MissingToken)));
    }
}
