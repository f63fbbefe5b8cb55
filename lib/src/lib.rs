pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod sendgrid;
pub mod validate;

pub use error::{Error, Result};
pub use request::{Attachment, ContentPart, EmailAddress, MailRequest, TemplateBinding};
pub use response::MailResponse;
pub use sendgrid::SendgridMailer;

/// Capability set shared by provider adapters.
///
/// A mailer is session-scoped: initialize it once with a credential, then
/// compose and send independent mail requests sequentially. Additional
/// providers implement this trait without touching the request data model.
pub trait Mailer {
    /// Creates the provider session. Fails if the key is empty;
    /// re-initializing replaces the prior session.
    fn initialize(&mut self, api_key: &str) -> Result<()>;

    /// Converts a validated request into the provider's payload shape,
    /// re-validating each address as it is consumed.
    fn compose(&mut self, request: &MailRequest) -> Result<()>;

    /// Issues a single send attempt for the composed mail. `test_mode`
    /// enables the provider's sandbox, which validates the payload but
    /// never delivers. No retry: success or failure is surfaced as-is.
    fn send(&mut self, test_mode: bool) -> Result<MailResponse>;
}
