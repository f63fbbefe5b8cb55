/// All possible Courier library errors.
///
/// Local validation failures are raised immediately at the point of
/// violation. Provider-side failures (bad credential, malformed attachment,
/// unknown template) are *not* errors: they come back to the caller as
/// ordinary `MailResponse` values with non-2xx status codes.
#[derive(Debug)]
pub enum Error {
    /// `initialize` was called with an empty API key.
    MissingApiKey,
    /// A builder was asked to build with a required field absent.
    MissingField(Field),
    /// An address failed the email-syntax check during composition.
    InvalidEmail { role: Role, address: String },
    /// `compose`/`send` called out of order.
    NotReady(&'static str),
    /// Network-level fault from the transport, propagated unchanged.
    Transport(reqwest::Error),
    Serialize(serde_json::Error),
}

/// Required fields that builders check for at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    Recipients,
    Subject,
    Content,
    AttachmentContent,
    AttachmentFilename,
    TemplateId,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match *self {
            Field::From => "from",
            Field::Recipients => "to",
            Field::Subject => "subject",
            Field::Content => "content",
            Field::AttachmentContent => "attachment content",
            Field::AttachmentFilename => "attachment filename",
            Field::TemplateId => "template id",
        }
    }
}

/// Which side of the envelope an address was being used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    From,
    To,
    Cc,
    Bcc,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match *self {
            Role::From => "from",
            Role::To => "to",
            Role::Cc => "cc",
            Role::Bcc => "bcc",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingApiKey => write!(f, "API key is empty"),
            Error::MissingField(ref field) => write!(f, "Required field is missing: {}", field.name()),
            Error::InvalidEmail { ref role, ref address } => {
                write!(f, "Email {} is not valid: {}", role.name(), address)
            }
            Error::NotReady(ref msg) => write!(f, "Not ready: {}", msg),
            Error::Transport(ref e) => write!(f, "Transport: {}", e),
            Error::Serialize(ref e) => write!(f, "Serialize: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
