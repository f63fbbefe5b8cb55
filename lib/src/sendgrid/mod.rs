//! SendGrid adapter: converts a `MailRequest` into the v3 `mail/send`
//! payload and issues the call through a pluggable `Transport`.

mod client;
pub mod types;

pub use client::{Session, Transport, TransportResponse, API_BASE_URL, MAIL_SEND_ENDPOINT};

use reqwest::Method;

use crate::error::{Error, Result, Role};
use crate::request::{ContentPart, EmailAddress, MailRequest, TemplateBinding};
use crate::response::MailResponse;
use crate::validate::is_valid_email;
use crate::Mailer;

/// The SendGrid dispatcher.
///
/// Holds one provider session and the composition state for a single
/// in-flight mail. `compose` replaces any previously composed payload, so
/// one instance can send multiple mails sequentially, but it is not safe to
/// interleave compose/send for different mails from multiple callers.
///
/// The mail-settings object (sandbox toggle) is shared across calls: once a
/// test send enables sandbox mode, it stays enabled for subsequent sends on
/// the same instance.
pub struct SendgridMailer<T: Transport = Session> {
    session: Option<T>,
    mail: Option<types::Mail>,
    settings: types::MailSettings,
}

impl<T: Transport> SendgridMailer<T> {
    pub fn new() -> Self {
        Self {
            session: None,
            mail: None,
            settings: Default::default(),
        }
    }

    /// Each address is validated at the point it is converted, not eagerly,
    /// so the error names the exact role and value that failed.
    fn convert_address(address: &EmailAddress, role: Role) -> Result<types::Address> {
        if !is_valid_email(&address.address) {
            return Err(Error::InvalidEmail {
                role,
                address: address.address.clone(),
            });
        }

        Ok(types::Address {
            email: address.address.clone(),
            name: address.display_name.clone(),
        })
    }

    fn convert_content(content: &ContentPart) -> types::Content {
        types::Content {
            type_: content.mime_type.clone(),
            value: content.value.clone(),
        }
    }

    fn apply_template(mail: &mut types::Mail, template: &TemplateBinding) {
        mail.template_id = Some(template.template_id.clone());

        if let Some(substitutions) = &template.substitutions {
            let data = mail.personalizations[0]
                .dynamic_template_data
                .get_or_insert_with(Default::default);

            for (key, value) in substitutions {
                data.insert(key.clone(), value.clone());
            }
        }
    }
}

impl<T: Transport> Default for SendgridMailer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Mailer for SendgridMailer<T> {
    /// Stores a provider session for the given key. Re-initializing
    /// replaces the prior session.
    fn initialize(&mut self, api_key: &str) -> Result<()> {
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        self.session = Some(T::create_session(api_key));
        Ok(())
    }

    /// Builds the provider payload from a validated request. All recipients
    /// land on a single personalization block, order preserved.
    fn compose(&mut self, request: &MailRequest) -> Result<()> {
        if self.session.is_none() {
            return Err(Error::NotReady("initialize must be called before compose"));
        }

        let from = Self::convert_address(&request.from, Role::From)?;

        let mut personalization = types::Personalization::default();
        for address in &request.to {
            personalization.to.push(Self::convert_address(address, Role::To)?);
        }
        if let Some(cc) = &request.cc {
            personalization.cc = Some(vec![Self::convert_address(cc, Role::Cc)?]);
        }
        if let Some(bcc) = &request.bcc {
            personalization.bcc = Some(vec![Self::convert_address(bcc, Role::Bcc)?]);
        }

        let mut mail = types::Mail {
            from,
            subject: request.subject.clone(),
            content: vec![Self::convert_content(&request.content)],
            personalizations: vec![personalization],
            attachments: None,
            template_id: None,
            mail_settings: self.settings.clone(),
        };

        if !request.attachments.is_empty() {
            mail.attachments = Some(
                request
                    .attachments
                    .iter()
                    .map(|a| types::Attachment {
                        content: a.content.clone(),
                        filename: a.filename.clone(),
                        type_: a.mime_type.clone(),
                    })
                    .collect(),
            );
        }

        if let Some(template) = &request.template {
            Self::apply_template(&mut mail, template);
        }

        log::debug!(
            "Composed mail from {} to {} recipient(s)",
            mail.from.email,
            mail.personalizations[0].to.len()
        );

        self.mail = Some(mail);
        Ok(())
    }

    /// Serializes the composed payload and issues exactly one POST to the
    /// provider. A test send enables sandbox mode first; a regular send
    /// never touches the settings, so a previously enabled sandbox sticks.
    fn send(&mut self, test_mode: bool) -> Result<MailResponse> {
        if test_mode {
            self.settings.sandbox_mode.enable = true;
        }

        let session = match self.session.as_ref() {
            Some(session) => session,
            None => return Err(Error::NotReady("initialize must be called before send")),
        };
        let mail = match self.mail.as_mut() {
            Some(mail) => mail,
            None => return Err(Error::NotReady("compose must be called before send")),
        };

        mail.mail_settings = self.settings.clone();
        let body = serde_json::to_string(mail)?;

        log::debug!("Sending {} byte payload to {}", body.len(), MAIL_SEND_ENDPOINT);
        let resp = session.send(Method::POST, MAIL_SEND_ENDPOINT, &body)?;
        log::debug!("Provider replied with status {}", resp.status_code);

        Ok(MailResponse {
            status_code: resp.status_code,
            provider_message: resp.body,
            sent_payload: Some(body),
        })
    }
}
