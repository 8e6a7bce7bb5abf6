//! # ログ出力の初期化
//!
//! 埋め込み先のプロセスに `tracing` のサブスクライバを 1 つだけ設定する。
//!
//! | 変数名 | 説明 |
//! |--------|------|
//! | `RUST_LOG` | フィルタ（未設定時は [`TracingConfig::default_filter`]） |
//! | `LOG_FORMAT` | `json` または `pretty`（大文字小文字・前後の空白は無視） |

/// 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,julge=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 イベントの JSON
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式を読み取る
    ///
    /// 不明な値は `Pretty` として扱い、stderr に警告を出す（サブスクライバ設定前のため）。
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "" | "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }
}

/// ログ初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// 初期化の成否を報告するときの呼び出し元の名前
    pub service_name:   String,
    pub log_format:     LogFormat,
    /// `RUST_LOG` が未設定または不正なときのフィルタ
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }

    /// `LOG_FORMAT` から出力形式を決める
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// サブスクライバを設定する
///
/// 設定した場合は `true`。既に別のサブスクライバがあるときは何もせず `false` を返す。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) -> bool {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.default_filter));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}
