//! Julge API の DTO / リクエスト型
//!
//! リモートサービスは各リソースを `{ "item": {...}, "links": [...] }` で包んで返す。
//! `links` はクライアントでは使わないため読み捨てる。

use serde::{Deserialize, Serialize};

// --- 共通 ---

/// `{ "item": T }` 形式のエンベロープ
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub item: T,
}

// --- レスポンス型 ---

/// 応募一覧レスポンス
///
/// `items` が欠落している場合は空の一覧（次ページなし）として扱う。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationListResponse {
    #[serde(default)]
    pub offset:   u32,
    #[serde(default)]
    pub limit:    u32,
    #[serde(default)]
    pub count:    u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub items:    Option<Vec<Envelope<ApplicationItemDto>>>,
}

impl ApplicationListResponse {
    /// エンベロープを外した応募一覧と次ページの有無を返す
    pub fn into_items(self) -> (Vec<ApplicationItemDto>, bool) {
        match self.items {
            Some(items) => (
                items.into_iter().map(|envelope| envelope.item).collect(),
                self.has_next,
            ),
            None => (Vec::new(), false),
        }
    }
}

/// 応募 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationItemDto {
    pub id:         String,
    pub status:     String,
    pub created_at: Option<String>,
    pub user:       Option<Envelope<UserDto>>,
    pub shop:       Option<Envelope<ShopDto>>,
    pub notice:     Option<Envelope<NoticeDto>>,
}

/// 応募者（従業員）DTO
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id:    String,
    pub email: Option<String>,
    pub name:  Option<String>,
    pub phone: Option<String>,
    pub bio:   Option<String>,
}

/// 店舗 DTO
#[derive(Debug, Clone, Deserialize)]
pub struct ShopDto {
    pub id:   String,
    pub name: String,
}

/// 求人公告 DTO
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub id:          String,
    pub hourly_pay:  u32,
    pub starts_at:   String,
    pub workhour:    u32,
    pub description: Option<String>,
    #[serde(default)]
    pub closed:      bool,
}

// --- リクエスト型 ---

/// 応募ステータス変更リクエスト
#[derive(Debug, Serialize)]
pub struct UpdateApplicationRequest {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_応募一覧をデシリアライズする() {
        let json = r#"{
            "offset": 0,
            "limit": 5,
            "count": 1,
            "hasNext": true,
            "items": [{
                "item": {
                    "id": "app-1",
                    "status": "pending",
                    "createdAt": "2025-01-01T00:00:00.000Z",
                    "user": {
                        "item": {"id": "u1", "email": "a@example.com", "name": "山田", "phone": "010-1234-5678"},
                        "href": "/users/u1"
                    }
                },
                "links": []
            }],
            "links": []
        }"#;

        let response: ApplicationListResponse = serde_json::from_str(json).unwrap();
        let (items, has_next) = response.into_items();

        assert!(has_next);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "app-1");
        let user = &items[0].user.as_ref().unwrap().item;
        assert_eq!(user.name.as_deref(), Some("山田"));
        assert_eq!(user.bio, None);
    }

    #[test]
    fn test_itemsが欠落していれば空で次ページなし() {
        let response: ApplicationListResponse =
            serde_json::from_str(r#"{"offset": 0, "limit": 5, "hasNext": true}"#).unwrap();

        let (items, has_next) = response.into_items();

        assert!(items.is_empty());
        assert!(!has_next);
    }

    #[test]
    fn test_ステータス変更リクエストをシリアライズする() {
        let req = UpdateApplicationRequest {
            status: "accepted".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "status": "accepted" })
        );
    }
}
