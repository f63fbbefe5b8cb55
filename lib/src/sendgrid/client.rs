use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;

use crate::error::Result;

pub const API_BASE_URL: &str = "https://api.sendgrid.com/v3";
pub const MAIL_SEND_ENDPOINT: &str = "mail/send";

/// Raw HTTP-level reply from the provider.
#[derive(Debug)]
pub struct TransportResponse {
    pub status_code: u16,
    pub body: String,
}

/// Minimal contract the dispatcher needs from the provider transport:
/// a session created from a credential, and a single blocking call.
///
/// Network faults surface as `Error::Transport` and are never retried
/// or rewrapped here.
pub trait Transport {
    fn create_session(api_key: &str) -> Self;
    fn send(&self, method: Method, endpoint: &str, body: &str) -> Result<TransportResponse>;
}

/// Provider session over HTTP.
pub struct Session {
    api_key: String,
    client: Client,
}

impl Transport for Session {
    fn create_session(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    fn send(&self, method: Method, endpoint: &str, body: &str) -> Result<TransportResponse> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);

        let resp = self
            .client
            .request(method, url.as_str())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()?;

        let status_code = resp.status().as_u16();
        let body = resp.text()?;

        Ok(TransportResponse { status_code, body })
    }
}
