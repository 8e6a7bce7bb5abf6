//! # 店舗
//!
//! 求人公告を掲載する店舗の識別子。

define_opaque_id! {
    /// 店舗 ID
    pub struct ShopId("店舗 ID");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_前後の空白を除去して作成できる() {
        let id = ShopId::new("  shop-1\n").unwrap();

        assert_eq!(id.as_str(), "shop-1");
        assert_eq!(id.to_string(), "shop-1");
    }

    #[test]
    fn test_空文字列はバリデーションエラー() {
        assert!(ShopId::new("").is_err());
        assert!(ShopId::new("   ").is_err());
    }

    #[test]
    fn test_jsonでは素の文字列として扱う() {
        let id: ShopId = serde_json::from_str(r#""abc""#).unwrap();

        assert_eq!(id.as_str(), "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }

    #[test]
    fn test_jsonの空文字列はデシリアライズエラー() {
        let result: Result<ShopId, _> = serde_json::from_str(r#""""#);

        assert!(result.is_err());
    }
}
