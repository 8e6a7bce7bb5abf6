//! # 利用者への通知
//!
//! 一覧取得や状態変更の失敗を利用者に伝える窓口（ブラウザの alert 相当）。
//! 失敗はコントローラの境界で捕捉して通知し、呼び出し元の画面を落とさない。

use std::sync::Mutex;

/// 利用者への通知先
pub trait Notifier: Send + Sync {
    /// エラーメッセージを通知する
    fn alert(&self, message: &str);
}

/// ログに出力するだけの通知先
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(%message, "利用者への通知");
    }
}

/// 通知内容をメモリに保持する通知先
///
/// 埋め込み先で通知をまとめて表示する場合やテストで使う。
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// これまでに通知されたメッセージ
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

impl Notifier for MemoryNotifier {
    fn alert(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}
