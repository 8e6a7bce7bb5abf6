//! # 応募審査の設定
//!
//! 環境変数から API 接続先・ページサイズ・認証トークンなどを読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `JULGE_API_URL` | **Yes** | API のベース URL |
//! | `JULGE_PAGE_SIZE` | No | 応募者一覧の 1 ページあたりの件数（デフォルト: `5`） |
//! | `JULGE_HTTP_TIMEOUT_SECS` | No | リクエストのタイムアウト秒数（デフォルト: `10`） |
//! | `JULGE_ACCESS_TOKEN` | No | 認証トークン |
//! | `JULGE_UTC_OFFSET_HOURS` | No | 勤務期間の表示タイムゾーン（デフォルト: `9`） |

use std::{env, time::Duration};

use chrono::FixedOffset;
use julge_client::{ApiError, BearerToken, JulgeApiClientImpl};
use julge_domain::pagination::PageLimit;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 値が不正
    #[error("{key} の値が不正です: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// 応募審査の設定
#[derive(Debug, Clone)]
pub struct RecruitConfig {
    /// API のベース URL
    pub api_url:        Url,
    /// 応募者一覧のページサイズ
    pub page_size:      PageLimit,
    /// リクエストのタイムアウト
    pub http_timeout:   Duration,
    /// 認証トークン
    pub access_token:   Option<BearerToken>,
    /// 勤務期間の表示タイムゾーン
    pub display_offset: FixedOffset,
}

impl RecruitConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストではプロセスの環境変数を汚さずに検証するために使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup("JULGE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("JULGE_API_URL"))?;
        let api_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::Invalid {
            key:    "JULGE_API_URL",
            reason: e.to_string(),
        })?;

        let page_size = match lookup("JULGE_PAGE_SIZE") {
            Some(raw) => {
                let value = parse_number::<u32>("JULGE_PAGE_SIZE", &raw)?;
                PageLimit::new(value).map_err(|e| ConfigError::Invalid {
                    key:    "JULGE_PAGE_SIZE",
                    reason: e.to_string(),
                })?
            }
            None => PageLimit::default(),
        };

        let timeout_secs = match lookup("JULGE_HTTP_TIMEOUT_SECS") {
            Some(raw) => parse_number::<u64>("JULGE_HTTP_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let access_token = lookup("JULGE_ACCESS_TOKEN").and_then(|v| BearerToken::new(v).ok());

        let offset_hours = match lookup("JULGE_UTC_OFFSET_HOURS") {
            Some(raw) => parse_number::<i32>("JULGE_UTC_OFFSET_HOURS", &raw)?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        let display_offset = offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::Invalid {
                key:    "JULGE_UTC_OFFSET_HOURS",
                reason: format!("範囲外のオフセットです: {offset_hours}"),
            })?;

        Ok(Self {
            api_url,
            page_size,
            http_timeout: Duration::from_secs(timeout_secs),
            access_token,
            display_offset,
        })
    }

    /// 設定から API クライアントを構築する
    pub fn build_client(&self) -> Result<JulgeApiClientImpl, ApiError> {
        let client = JulgeApiClientImpl::new(self.api_url.as_str(), self.http_timeout)?;
        Ok(match &self.access_token {
            Some(token) => client.with_token(token.clone()),
            None => client,
        })
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
