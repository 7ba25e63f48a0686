//! Error types for the API client.

use serde_json::Value;

/// Machine-readable codes for client-side validation and service-level failures.
///
/// Codes are stable integers so they can be compared with values returned
/// by [`Error::code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// Decoded media payload is larger than 16 MiB.
    FileSize = 1001,
    /// Filename is longer than 255 characters.
    FilenameLength = 1002,
    /// Caption is longer than 1024 characters.
    CaptionLength = 1003,
    /// File extension is not accepted for the endpoint, or the payload is not valid base64.
    InvalidFileFormat = 1004,
    GroupPermission = 1005,
    SessionInvalid = 1006,
    Connection = 1007,
    Authentication = 1008,
}

impl ErrorCode {
    const ALL: [ErrorCode; 8] = [
        ErrorCode::FileSize,
        ErrorCode::FilenameLength,
        ErrorCode::CaptionLength,
        ErrorCode::InvalidFileFormat,
        ErrorCode::GroupPermission,
        ErrorCode::SessionInvalid,
        ErrorCode::Connection,
        ErrorCode::Authentication,
    ];

    /// Returns the numeric value carried in [`Error::code`].
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Looks up the enumerated code for a raw integer, if it is one.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Canonical human-readable message used when no explicit message is given.
    pub fn message(self) -> &'static str {
        match self {
            ErrorCode::FileSize => "File exceeds the maximum allowed size of 16MB",
            ErrorCode::FilenameLength => "Filename exceeds the maximum length of 255 characters",
            ErrorCode::CaptionLength => "Caption exceeds the maximum length of 1024 characters",
            ErrorCode::InvalidFileFormat => "Unsupported file format",
            ErrorCode::GroupPermission => "You do not have permission to post in this group",
            ErrorCode::SessionInvalid => "The session is invalid or has expired",
            ErrorCode::Connection => "Could not connect to the WhatsApp service",
            ErrorCode::Authentication => "Authentication failed",
        }
    }

    pub fn is_validation(self) -> bool {
        matches!(
            self,
            ErrorCode::FileSize
                | ErrorCode::FilenameLength
                | ErrorCode::CaptionLength
                | ErrorCode::InvalidFileFormat
        )
    }

    pub fn is_authentication(self) -> bool {
        matches!(
            self,
            ErrorCode::GroupPermission | ErrorCode::SessionInvalid | ErrorCode::Authentication
        )
    }
}

/// Error returned by every client operation.
///
/// `code` is `0` for transport and decoding failures, one of the
/// [`ErrorCode`] values for validation and service failures, or the HTTP
/// status when the API rejected the request. In the last case
/// `error_data` holds the decoded error body.
#[derive(thiserror::Error, Debug, Clone)]
#[error("{message}")]
pub struct Error {
    message: String,
    code: u16,
    error_data: Option<Value>,
}

impl Error {
    /// Builds an error with an explicit message and raw code.
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
            error_data: None,
        }
    }

    /// Builds an error from a raw code, falling back to the canonical
    /// [`ErrorCode`] message when `message` is missing or empty.
    pub fn with_code(code: u16, message: Option<String>, error_data: Option<Value>) -> Self {
        let message = match message.filter(|m| !m.is_empty()) {
            Some(message) => message,
            None => ErrorCode::from_code(code)
                .map(|c| c.message().to_string())
                .unwrap_or_default(),
        };
        Self {
            message,
            code,
            error_data,
        }
    }

    /// Unclassified failure (code `0`).
    pub(crate) fn unclassified(message: impl Into<String>) -> Self {
        Self::new(message, 0)
    }

    /// The API answered with an error status.
    pub(crate) fn http_status(status: u16, message: String, body: Value) -> Self {
        Self {
            message,
            code: status,
            error_data: Some(body),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    /// The enumerated code, when [`Error::code`] is one of the known values.
    pub fn error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.code)
    }

    /// Decoded error body returned by the API, if any.
    pub fn error_data(&self) -> Option<&Value> {
        self.error_data.as_ref()
    }

    /// True for file size, filename, caption and file format failures.
    pub fn is_validation_error(&self) -> bool {
        self.error_code().is_some_and(ErrorCode::is_validation)
    }

    /// True for group permission, invalid session and authentication failures.
    pub fn is_authentication_error(&self) -> bool {
        self.error_code().is_some_and(ErrorCode::is_authentication)
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self::new(code.message(), code.code())
    }
}
