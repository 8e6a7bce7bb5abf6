//! JulgeApiClient スーパートレイトとクライアント実装の構造体

use std::time::Duration;

use super::{
    ApiError,
    BearerToken,
    shop_application_client::ShopApplicationClient,
    user_application_client::UserApplicationClient,
};

/// Julge API クライアントトレイト（スーパートレイト）
///
/// 雇用主側 / 従業員側の各サブトレイトを束ねる。
/// テスト時にはサブトレイト単位でスタブを使用できる。
pub trait JulgeApiClient: ShopApplicationClient + UserApplicationClient {}

/// ブランケット impl: 2 つのサブトレイトをすべて実装する型は
/// 自動的に `JulgeApiClient` を実装する。
impl<T> JulgeApiClient for T where T: ShopApplicationClient + UserApplicationClient {}

/// Julge API クライアント実装
///
/// 認証トークンはグローバルな保存領域から読まず、生成時に明示的に注入する。
#[derive(Clone)]
pub struct JulgeApiClientImpl {
    pub(crate) base_url: String,
    pub(crate) client:   reqwest::Client,
    pub(crate) token:    Option<BearerToken>,
}

impl JulgeApiClientImpl {
    /// 新しい JulgeApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: API のベース URL（例: `https://api.example.com/api/0-1/the-julge`）
    /// - `timeout`: 1 リクエストあたりのタイムアウト
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        })
    }

    /// 認証トークンを設定したクライアントを返す
    pub fn with_token(mut self, token: BearerToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// パスセグメントを URL エンコードして連結した URL
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    /// トークンがあれば Authorization ヘッダーを付与する
    pub(crate) fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    /// 認証必須の操作でトークンを取り出す
    ///
    /// 未設定の場合はリクエストを送らずに `ApiError::MissingToken` を返す。
    pub(crate) fn require_token(&self) -> Result<&BearerToken, ApiError> {
        self.token.as_ref().ok_or(ApiError::MissingToken)
    }
}

impl std::fmt::Debug for JulgeApiClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JulgeApiClientImpl")
            .field("base_url", &self.base_url)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> JulgeApiClientImpl {
        JulgeApiClientImpl::new("http://localhost:8080/api/", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_ベースurlの末尾スラッシュを除去する() {
        assert_eq!(client().base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_パスセグメントをエンコードして連結する() {
        let url = client().url(&["shops", "a b/c", "notices"]);

        assert_eq!(url, "http://localhost:8080/api/shops/a%20b%2Fc/notices");
    }

    #[test]
    fn test_トークン未設定ならmissing_token() {
        let client = client();

        assert!(!client.has_token());
        assert_eq!(client.require_token().unwrap_err(), ApiError::MissingToken);
    }

    #[test]
    fn test_with_tokenでトークンを設定する() {
        let client = client().with_token(BearerToken::new("t0ken").unwrap());

        assert!(client.has_token());
        assert_eq!(client.require_token().unwrap().expose(), "t0ken");
    }

    #[test]
    fn test_debug出力にトークンを含めない() {
        let client = client().with_token(BearerToken::new("t0ken").unwrap());

        assert!(!format!("{client:?}").contains("t0ken"));
    }

    #[test]
    fn test_トークンがあればauthorizationヘッダーを付与する() {
        let client = client().with_token(BearerToken::new("t0ken").unwrap());

        let request = client
            .authorize(client.client.get(client.url(&["users"])))
            .build()
            .unwrap();

        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer t0ken"
        );
    }

    #[test]
    fn test_トークンがなければauthorizationヘッダーを付与しない() {
        let client = client();

        let request = client
            .authorize(client.client.get(client.url(&["users"])))
            .build()
            .unwrap();

        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
