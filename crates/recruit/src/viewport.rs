//! # ビューポート
//!
//! 幅の変化を受け取って端末区分を再計算し、区分が変わったときだけ購読者に通知する。
//! 表示項目の選択はこの区分から導出するだけで、データの取得とは独立している。

use julge_domain::layout::{Breakpoints, DeviceClass};
use tokio::sync::watch;

/// 端末区分のシグナル
#[derive(Debug)]
pub struct Viewport {
    breakpoints: Breakpoints,
    sender:      watch::Sender<DeviceClass>,
}

impl Viewport {
    pub fn new(breakpoints: Breakpoints, initial_width: u32) -> Self {
        let (sender, _) = watch::channel(breakpoints.classify(initial_width));
        Self {
            breakpoints,
            sender,
        }
    }

    /// リサイズイベントを反映する
    ///
    /// 端末区分が変わった場合は `true` を返し、購読者に通知する。
    pub fn resize(&self, width: u32) -> bool {
        let next = self.breakpoints.classify(width);
        let changed = self.sender.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        if changed {
            tracing::debug!(width, device = %next, "端末区分が変わりました");
        }
        changed
    }

    /// 現在の端末区分
    pub fn device_class(&self) -> DeviceClass {
        *self.sender.borrow()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// 端末区分の変化を購読する
    pub fn subscribe(&self) -> watch::Receiver<DeviceClass> {
        self.sender.subscribe()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Breakpoints::default(), u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_初期幅から端末区分を判定する() {
        let viewport = Viewport::new(Breakpoints::default(), 375);

        assert_eq!(viewport.device_class(), DeviceClass::Mobile);
        assert_eq!(Viewport::default().device_class(), DeviceClass::Desktop);
    }

    #[test]
    fn test_同じ区分内のリサイズは通知しない() {
        let viewport = Viewport::new(Breakpoints::default(), 800);
        let receiver = viewport.subscribe();

        assert!(!viewport.resize(900));
        assert!(!receiver.has_changed().unwrap());
        assert_eq!(viewport.device_class(), DeviceClass::Tablet);
    }

    #[tokio::test]
    async fn test_区分が変わると購読者に通知する() {
        let viewport = Viewport::new(Breakpoints::default(), 1280);
        let mut receiver = viewport.subscribe();

        assert!(viewport.resize(600));
        receiver.changed().await.unwrap();

        assert_eq!(*receiver.borrow_and_update(), DeviceClass::Mobile);
        assert!(!receiver.has_changed().unwrap());
    }

    #[test]
    fn test_しきい値を指定できる() {
        let viewport = Viewport::new(Breakpoints::new(640, 1024), 700);

        assert_eq!(viewport.device_class(), DeviceClass::Tablet);
        assert!(viewport.resize(640));
        assert_eq!(viewport.device_class(), DeviceClass::Mobile);
    }
}
