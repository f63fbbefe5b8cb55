use serde::{Deserialize, Serialize};

/// HTTP-level outcome of a send, as reported by the provider.
///
/// Built only by a dispatcher. A non-2xx status here is a business outcome
/// (unauthorized key, rejected attachment, unknown template), not a fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailResponse {
    pub status_code: u16,
    /// Raw provider response body.
    pub provider_message: String,
    /// The exact serialized payload that went out, kept for inspection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_payload: Option<String>,
}

impl MailResponse {
    pub fn is_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}
