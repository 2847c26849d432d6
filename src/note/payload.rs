//! Request bodies for the note.com text note endpoints
//!
//! The fixed publish values (comments, pay-wall, visibility, LINE and lead
//! form toggles) mirror what the note.com editor sends. They are part of the
//! platform contract and will need revisiting when the editor API changes.

use serde::Serialize;
use serde_json::Value;

/// Revision of the editor contract the publish template follows
pub const PUBLISH_TEMPLATE_VERSION: &str = "editor-2025-08";

/// Body of `POST /api/v1/text_notes`
#[derive(Debug, Serialize)]
pub struct CreateTextNote {
    pub template_key: Option<String>,
}

impl CreateTextNote {
    pub fn blank() -> Self {
        Self { template_key: None }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LeadForm {
    pub is_active: bool,
    pub consent_url: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LineAddFriend {
    pub is_active: bool,
    pub keyword: String,
    pub add_friend_url: String,
}

/// Body of `PUT /api/v1/text_notes/{id}` that publishes a note
#[derive(Debug, Serialize)]
pub struct PublishPayload {
    pub author_ids: Vec<u64>,
    pub body_length: usize,
    pub disable_comment: bool,
    pub exclude_from_creator_top: bool,
    pub exclude_ai_learning_reward: bool,
    pub free_body: String,
    pub hashtags: Vec<String>,
    pub image_keys: Vec<String>,
    pub index: bool,
    pub is_refund: bool,
    pub limited: bool,
    pub magazine_ids: Vec<u64>,
    pub magazine_keys: Vec<String>,
    pub name: String,
    pub pay_body: String,
    pub price: u32,
    pub send_notifications_flag: bool,
    pub separator: Option<String>,
    pub slug: String,
    pub status: String,
    pub circle_permissions: Vec<Value>,
    pub discount_campaigns: Vec<Value>,
    pub lead_form: LeadForm,
    pub line_add_friend: LineAddFriend,
    pub line_add_friend_access_token: String,
}

impl PublishPayload {
    /// Free, commentable, public note. `body_length` counts the raw HTML.
    pub fn published(title: &str, body: &str, hashtags: Vec<String>, note_key: &str) -> Self {
        Self {
            author_ids: Vec::new(),
            body_length: body.chars().count(),
            disable_comment: false,
            exclude_from_creator_top: false,
            exclude_ai_learning_reward: false,
            free_body: body.to_string(),
            hashtags,
            image_keys: Vec::new(),
            index: false,
            is_refund: false,
            limited: false,
            magazine_ids: Vec::new(),
            magazine_keys: Vec::new(),
            name: title.to_string(),
            pay_body: String::new(),
            price: 0,
            send_notifications_flag: true,
            separator: None,
            slug: format!("slug-{}", note_key),
            status: "published".to_string(),
            circle_permissions: Vec::new(),
            discount_campaigns: Vec::new(),
            lead_form: LeadForm {
                is_active: false,
                consent_url: String::new(),
            },
            line_add_friend: LineAddFriend {
                is_active: false,
                keyword: String::new(),
                add_friend_url: String::new(),
            },
            line_add_friend_access_token: String::new(),
        }
    }
}

/// Body of `POST /api/v1/text_notes/draft_save`
#[derive(Debug, Serialize)]
pub struct DraftSavePayload {
    pub body: String,
    pub body_length: usize,
    pub index: bool,
    pub is_lead_form: bool,
    pub name: String,
}

impl DraftSavePayload {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            body: body.to_string(),
            body_length: super::html::visible_length(body),
            index: false,
            is_lead_form: false,
            name: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_has_null_template() {
        let value = serde_json::to_value(CreateTextNote::blank()).unwrap();
        assert_eq!(value, json!({ "template_key": null }));
    }

    #[test]
    fn test_publish_payload_fields() {
        let payload = PublishPayload::published(
            "Title",
            "<p>Hi</p>",
            vec!["#rust".to_string()],
            "n1a2b3",
        );
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 25);
        assert_eq!(value["name"], "Title");
        assert_eq!(value["free_body"], "<p>Hi</p>");
        assert_eq!(value["body_length"], 9);
        assert_eq!(value["hashtags"], json!(["#rust"]));
        assert_eq!(value["slug"], "slug-n1a2b3");
        assert_eq!(value["status"], "published");
        assert_eq!(value["price"], 0);
        assert_eq!(value["disable_comment"], false);
        assert_eq!(value["send_notifications_flag"], true);
        assert!(value["separator"].is_null());
        assert_eq!(
            value["lead_form"],
            json!({ "is_active": false, "consent_url": "" })
        );
        assert_eq!(
            value["line_add_friend"],
            json!({ "is_active": false, "keyword": "", "add_friend_url": "" })
        );
    }

    #[test]
    fn test_draft_payload_uses_visible_length() {
        let payload = DraftSavePayload::new("Draft", "<p>Hello&nbsp;World</p>");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "body": "<p>Hello&nbsp;World</p>",
                "body_length": 11,
                "index": false,
                "is_lead_form": false,
                "name": "Draft",
            })
        );
    }
}
