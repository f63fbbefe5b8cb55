/// Wire types for the SendGrid v3 `mail/send` payload.
///
/// These serialize to exactly the shape the provider expects; optional
/// members are omitted entirely when absent. They also deserialize so the
/// outgoing payload can be parsed back for inspection in tests.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Address {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

/// One recipient group sharing a single envelope. All `to` entries (plus
/// cc/bcc and template substitutions) ride on one of these, the provider's
/// "personalization" block.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Personalization {
    pub to: Vec<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_template_data: Option<HashMap<String, String>>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SandboxMode {
    pub enable: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MailSettings {
    pub sandbox_mode: SandboxMode,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Mail {
    pub from: Address,
    pub subject: String,
    pub content: Vec<Content>,
    pub personalizations: Vec<Personalization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub mail_settings: MailSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_members_are_omitted() {
        let mail = Mail {
            from: Address {
                email: "from@test.com".to_string(),
                name: "from".to_string(),
            },
            subject: "Subject".to_string(),
            content: vec![Content {
                type_: "text/html".to_string(),
                value: "Content".to_string(),
            }],
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: "to@test.com".to_string(),
                    name: "to".to_string(),
                }],
                ..Default::default()
            }],
            attachments: None,
            template_id: None,
            mail_settings: Default::default(),
        };

        let json = serde_json::to_string(&mail).unwrap();

        assert!(json.contains(r#""from":{"email":"from@test.com","name":"from"}"#));
        assert!(json.contains(r#""content":[{"type":"text/html","value":"Content"}]"#));
        assert!(json.contains(r#""sandbox_mode":{"enable":false}"#));
        assert!(!json.contains("attachments"));
        assert!(!json.contains("template_id"));
        assert!(!json.contains("cc"));
        assert!(!json.contains("dynamic_template_data"));
    }

    #[test]
    fn attachment_mime_type_serializes_as_type() {
        let attachment = Attachment {
            content: "dGVzdA==".to_string(),
            filename: "image.png".to_string(),
            type_: Some("image/png".to_string()),
        };

        let json = serde_json::to_string(&attachment).unwrap();
        assert_eq!(
            json,
            r#"{"content":"dGVzdA==","filename":"image.png","type":"image/png"}"#
        );
    }
}
