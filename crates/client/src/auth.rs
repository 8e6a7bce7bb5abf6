//! # Bearer トークン
//!
//! 認証が必要なリクエストに `Authorization: Bearer <token>` として付与する。
//! トークンの発行・更新・失効はリモートサービスの責務であり、
//! クライアントは注入された値をそのまま使う。

use std::fmt;

use crate::ApiError;

/// アクセストークン
///
/// `Debug` 出力はマスクされる。`Display` は実装しない。
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// トークン文字列から作成する
    ///
    /// 空文字列の場合は `ApiError::MissingToken` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, ApiError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ApiError::MissingToken);
        }
        Ok(Self(value))
    }

    /// ヘッダーに載せるための平文を取得する
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug出力はマスクされる() {
        let token = BearerToken::new("secret-token").unwrap();

        let debug = format!("{token:?}");

        assert!(!debug.contains("secret-token"));
        assert_eq!(debug, "BearerToken([REDACTED])");
    }

    #[test]
    fn test_空のトークンはmissing_token() {
        assert_eq!(BearerToken::new("  "), Err(ApiError::MissingToken));
    }

    #[test]
    fn test_前後の空白を除去する() {
        let token = BearerToken::new(" abc \n").unwrap();

        assert_eq!(token.expose(), "abc");
    }
}
