//! Julge API クライアントのエラー型

use thiserror::Error;

/// Julge API クライアントエラー
///
/// HTTP ステータスを伴う失敗は、リモートサービスが返したメッセージを保持する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// リクエスト不正（400）
    #[error("リクエストが不正です: {0}")]
    BadRequest(String),

    /// 未認証（401）
    #[error("ログインが必要です: {0}")]
    Unauthorized(String),

    /// 権限不足（403）
    #[error("権限がありません: {0}")]
    Forbidden(String),

    /// リソースが存在しない（404）
    #[error("見つかりません: {0}")]
    NotFound(String),

    /// 競合（409）
    #[error("競合が発生しました: {0}")]
    Conflict(String),

    /// 上記以外の非 2xx レスポンス
    #[error("予期しないステータス {status}: {message}")]
    Unexpected { status: u16, message: String },

    /// 接続失敗・タイムアウト
    #[error("サービスに接続できません: {0}")]
    Unavailable(String),

    /// ネットワークエラー（レスポンスの読み取り失敗を含む）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 認証が必要な操作にトークンが設定されていない
    ///
    /// リクエストは送信されない。
    #[error("ログインが必要です")]
    MissingToken,
}

impl ApiError {
    /// 対応する HTTP ステータスコード
    ///
    /// レスポンスを受け取れなかった失敗では `None`。
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::Unexpected { status, .. } => Some(*status),
            Self::Unavailable(_) | Self::Network(_) | Self::MissingToken => None,
        }
    }

    /// ステータスコードとメッセージからエラーを作成する
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::BadRequest(message),
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            _ => Self::Unexpected { status, message },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ApiError::Unavailable(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ステータスコードからバリアントを選ぶ() {
        assert_eq!(
            ApiError::from_status(401, "x".to_string()),
            ApiError::Unauthorized("x".to_string())
        );
        assert_eq!(
            ApiError::from_status(409, "x".to_string()),
            ApiError::Conflict("x".to_string())
        );
        assert_eq!(
            ApiError::from_status(500, "x".to_string()),
            ApiError::Unexpected {
                status:  500,
                message: "x".to_string(),
            }
        );
    }

    #[test]
    fn test_status_codeはレスポンスがある場合のみ返す() {
        assert_eq!(ApiError::from_status(503, String::new()).status_code(), Some(503));
        assert_eq!(ApiError::NotFound(String::new()).status_code(), Some(404));
        assert_eq!(ApiError::Network("reset".to_string()).status_code(), None);
        assert_eq!(ApiError::MissingToken.status_code(), None);
    }
}
