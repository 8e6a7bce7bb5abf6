//! Julge API レスポンスの共通ハンドリング

use serde::{Deserialize, de::DeserializeOwned};

use crate::error::ApiError;

/// エラーレスポンスのボディ
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// レスポンスの共通ハンドリング
///
/// 成功時はボディを `T` にデシリアライズし、
/// エラー時はステータスコードに応じた `ApiError` を返す。
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    let body = response.json::<T>().await?;
    Ok(body)
}

/// ボディを必要としないレスポンスのハンドリング
pub(crate) async fn handle_empty_response(response: reqwest::Response) -> Result<(), ApiError> {
    ensure_success(response).await.map(|_| ())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);

    tracing::warn!(status = status.as_u16(), %message, "Julge API がエラーを返しました");

    Err(ApiError::from_status(status.as_u16(), message))
}

/// エラーボディから利用者向けメッセージを取り出す
///
/// `{"message": "..."}` 形式ならその値、そうでなければボディ全体、
/// ボディが空ならステータスの説明文を使う。
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
        && !message.trim().is_empty()
    {
        return message;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("不明なエラーが発生しました")
        .to_string()
}
