/// リモートサービスが採番する不透明な ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`String` をラップ）
/// - `derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: trim + 空チェック
/// - `as_str()`: 内部文字列への参照
///
/// ID の形式（UUID など）はリモートサービスの責務であり、
/// クライアント側では空でないことだけを保証する。
///
/// # 使用例
///
/// ```rust
/// use julge_domain::shop::ShopId;
///
/// let id = ShopId::new(" shop-1 ").unwrap();
/// assert_eq!(id.as_str(), "shop-1");
/// assert!(ShopId::new("   ").is_err());
/// ```
macro_rules! define_opaque_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident($label:expr);
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(try_from = "String", into = "String")]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            /// 文字列から ID を作成する
            ///
            /// 前後の空白を除去し、空文字列の場合は `DomainError::Validation` を返す。
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into().trim().to_string();

                if value.is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{}は必須です",
                        $label
                    )));
                }

                Ok(Self(value))
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $Name {
            type Error = $crate::DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$Name> for String {
            fn from(id: $Name) -> Self {
                id.0
            }
        }
    };
}
