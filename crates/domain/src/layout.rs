//! # レスポンシブ表示項目の選択
//!
//! ビューポート幅から端末区分（[`DeviceClass`]）を判定し、
//! 端末区分ごとに表示する項目を選択する純粋関数を提供する。
//!
//! ## 表示規則
//!
//! 各項目は「表示され始める最小の端末区分」を宣言する。
//!
//! | 宣言 | mobile | tablet | desktop |
//! |------|--------|--------|---------|
//! | `Mobile` | ○ | ○ | ○ |
//! | `Tablet` | × | ○ | ○ |
//! | `Desktop` | × | × | ○ |
//!
//! したがって `visible_fields(mobile) ⊆ visible_fields(tablet) ⊆ visible_fields(desktop)`
//! が常に成り立つ。

use serde::{Deserialize, Serialize};

/// 端末区分
///
/// 宣言順に `Mobile < Tablet < Desktop` の全順序を持つ。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

/// 端末区分を判定する幅のしきい値（px）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// この幅以下を mobile とする
    pub mobile_max: u32,
    /// この幅以下（かつ mobile_max 超）を tablet とする
    pub tablet_max: u32,
}

impl Breakpoints {
    pub const fn new(mobile_max: u32, tablet_max: u32) -> Self {
        Self {
            mobile_max,
            tablet_max,
        }
    }

    /// ビューポート幅から端末区分を判定する
    ///
    /// ```rust
    /// use julge_domain::layout::{Breakpoints, DeviceClass};
    ///
    /// let bp = Breakpoints::default();
    /// assert_eq!(bp.classify(768), DeviceClass::Mobile);
    /// assert_eq!(bp.classify(769), DeviceClass::Tablet);
    /// assert_eq!(bp.classify(1025), DeviceClass::Desktop);
    /// ```
    pub fn classify(&self, width: u32) -> DeviceClass {
        if width <= self.mobile_max {
            DeviceClass::Mobile
        } else if width <= self.tablet_max {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(768, 1024)
    }
}

/// 表示項目の定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<K> {
    pub key:        K,
    pub label:      &'static str,
    /// 表示され始める最小の端末区分
    pub min_device: DeviceClass,
}

impl<K> FieldSpec<K> {
    pub const fn new(key: K, label: &'static str, min_device: DeviceClass) -> Self {
        Self {
            key,
            label,
            min_device,
        }
    }

    /// 最小端末区分を宣言しない項目（desktop でのみ表示）
    pub const fn desktop_only(key: K, label: &'static str) -> Self {
        Self::new(key, label, DeviceClass::Desktop)
    }

    pub fn is_visible_on(&self, device: DeviceClass) -> bool {
        self.min_device <= device
    }
}

/// 端末区分で表示する項目を選択する
///
/// 定義順を保持する。
pub fn visible_fields<K>(device: DeviceClass, specs: &[FieldSpec<K>]) -> Vec<&FieldSpec<K>> {
    specs
        .iter()
        .filter(|spec| spec.is_visible_on(device))
        .collect()
}
