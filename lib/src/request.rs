/// Request-side value types and their validating builders.
/// The idea is to keep these provider-agnostic and let each adapter
/// convert them into its own wire types during composition.
use std::collections::HashMap;

use crate::error::{Error, Field, Result};

/// An address plus the display name shown to the recipient.
///
/// Syntax is not checked here. A dispatcher validates each address at the
/// point it is converted for the wire, so an address that is
/// present-but-malformed still gets caught.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress {
    pub address: String,
    pub display_name: String,
}

impl EmailAddress {
    pub fn new(address: &str, display_name: &str) -> Self {
        Self {
            address: address.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// A MIME-typed body part.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPart {
    pub mime_type: String,
    pub value: String,
}

impl ContentPart {
    pub fn new(mime_type: &str, value: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            value: value.to_string(),
        }
    }
}

/// A base64-encoded attachment.
///
/// The content is *expected* to be valid base64, but that is never checked
/// locally. A malformed attachment is only detected by the provider, which
/// rejects the whole payload with an error-class status.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub content: String,
    pub filename: String,
    pub mime_type: Option<String>,
}

impl Attachment {
    pub fn builder() -> AttachmentBuilder {
        Default::default()
    }
}

#[derive(Debug, Default)]
pub struct AttachmentBuilder {
    content: Option<String>,
    filename: Option<String>,
    mime_type: Option<String>,
}

impl AttachmentBuilder {
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: &str) -> Self {
        self.filename = Some(filename.to_string());
        self
    }

    pub fn mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = Some(mime_type.to_string());
        self
    }

    pub fn build(self) -> Result<Attachment> {
        let content = self
            .content
            .ok_or(Error::MissingField(Field::AttachmentContent))?;
        let filename = self
            .filename
            .ok_or(Error::MissingField(Field::AttachmentFilename))?;

        Ok(Attachment {
            content,
            filename,
            mime_type: self.mime_type,
        })
    }
}

/// A provider-hosted template plus its key/value substitutions.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBinding {
    pub template_id: String,
    pub substitutions: Option<HashMap<String, String>>,
}

impl TemplateBinding {
    pub fn builder() -> TemplateBindingBuilder {
        Default::default()
    }
}

#[derive(Debug, Default)]
pub struct TemplateBindingBuilder {
    template_id: Option<String>,
    substitutions: Option<HashMap<String, String>>,
}

impl TemplateBindingBuilder {
    pub fn template_id(mut self, template_id: &str) -> Self {
        self.template_id = Some(template_id.to_string());
        self
    }

    pub fn substitutions(mut self, substitutions: HashMap<String, String>) -> Self {
        self.substitutions = Some(substitutions);
        self
    }

    pub fn build(self) -> Result<TemplateBinding> {
        let template_id = self
            .template_id
            .ok_or(Error::MissingField(Field::TemplateId))?;

        Ok(TemplateBinding {
            template_id,
            substitutions: self.substitutions,
        })
    }
}

/// A single outgoing mail, validated at build time.
///
/// All recipients in `to` share one logical envelope: a dispatcher must put
/// them on a single recipient group, not fan out N separate messages.
#[derive(Debug, Clone, PartialEq)]
pub struct MailRequest {
    pub from: EmailAddress,
    pub to: Vec<EmailAddress>,
    pub subject: String,
    pub content: ContentPart,
    pub cc: Option<EmailAddress>,
    pub bcc: Option<EmailAddress>,
    pub attachments: Vec<Attachment>,
    pub template: Option<TemplateBinding>,
}

impl MailRequest {
    pub fn builder() -> MailRequestBuilder {
        Default::default()
    }
}

#[derive(Debug, Default)]
pub struct MailRequestBuilder {
    from: Option<EmailAddress>,
    to: Vec<EmailAddress>,
    subject: Option<String>,
    content: Option<ContentPart>,
    cc: Option<EmailAddress>,
    bcc: Option<EmailAddress>,
    attachments: Vec<Attachment>,
    template: Option<TemplateBinding>,
}

impl MailRequestBuilder {
    pub fn from(mut self, from: EmailAddress) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: Vec<EmailAddress>) -> Self {
        self.to = to;
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn content(mut self, content: ContentPart) -> Self {
        self.content = Some(content);
        self
    }

    pub fn cc(mut self, cc: EmailAddress) -> Self {
        self.cc = Some(cc);
        self
    }

    pub fn bcc(mut self, bcc: EmailAddress) -> Self {
        self.bcc = Some(bcc);
        self
    }

    pub fn attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn template(mut self, template: TemplateBinding) -> Self {
        self.template = Some(template);
        self
    }

    /// Validates required fields in order: from, to, subject, content.
    /// The first missing field wins.
    pub fn build(self) -> Result<MailRequest> {
        let from = self.from.ok_or(Error::MissingField(Field::From))?;

        if self.to.is_empty() {
            return Err(Error::MissingField(Field::Recipients));
        }

        let subject = match self.subject {
            Some(ref s) if !s.trim().is_empty() => s.clone(),
            _ => return Err(Error::MissingField(Field::Subject)),
        };

        let content = self.content.ok_or(Error::MissingField(Field::Content))?;

        Ok(MailRequest {
            from,
            to: self.to,
            subject,
            content,
            cc: self.cc,
            bcc: self.bcc,
            attachments: self.attachments,
            template: self.template,
        })
    }
}
