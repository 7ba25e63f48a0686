//! Pre-flight checks run before media is sent.
//!
//! Every check returns an [`Error`] carrying the matching [`ErrorCode`] so a
//! rejected payload never reaches the network.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::errors::{Error, ErrorCode};

pub const MAX_FILENAME_LENGTH: usize = 255;
pub const MAX_CAPTION_LENGTH: usize = 1024;
/// 16 MiB, measured on the decoded payload.
pub const MAX_FILE_SIZE: usize = 16 * 1024 * 1024;

pub const PDF_EXTENSIONS: &[&str] = &["pdf"];
pub const OFFICE_EXTENSIONS: &[&str] = &["doc", "docx", "xls", "xlsx", "ppt", "pptx"];
pub const ZIP_EXTENSIONS: &[&str] = &["zip"];

/// Standard alphabet, padding optional. Senders are not consistent about it.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Rejects filenames longer than [`MAX_FILENAME_LENGTH`] characters.
pub fn validate_filename(filename: &str) -> Result<(), Error> {
    if filename.chars().count() > MAX_FILENAME_LENGTH {
        return Err(ErrorCode::FilenameLength.into());
    }
    Ok(())
}

/// Rejects captions longer than [`MAX_CAPTION_LENGTH`] characters. A missing caption is fine.
pub fn validate_caption(caption: Option<&str>) -> Result<(), Error> {
    match caption {
        Some(c) if c.chars().count() > MAX_CAPTION_LENGTH => Err(ErrorCode::CaptionLength.into()),
        _ => Ok(()),
    }
}

/// Decodes a raw or data-URI base64 payload and rejects it when the decoded
/// content is larger than [`MAX_FILE_SIZE`].
pub fn validate_file_size(content: &str) -> Result<(), Error> {
    let encoded = strip_data_uri(content).unwrap_or(content);
    let decoded = LENIENT.decode(encoded.trim()).map_err(|e| {
        tracing::debug!("Payload is not valid base64: {}", e);
        Error::from(ErrorCode::InvalidFileFormat)
    })?;
    if decoded.len() > MAX_FILE_SIZE {
        return Err(ErrorCode::FileSize.into());
    }
    Ok(())
}

/// Rejects filenames whose extension is not in `allowed` (lowercase entries).
pub fn validate_file_format(filename: &str, allowed: &[&str]) -> Result<(), Error> {
    let extension = file_extension(filename);
    if !allowed.contains(&extension.as_str()) {
        return Err(Error::new(
            format!("File format {} is not supported", extension),
            ErrorCode::InvalidFileFormat.code(),
        ));
    }
    Ok(())
}

/// Guesses whether `content` is inline base64 rather than a URL.
///
/// True for `data:<mime>;base64,` payloads and for non-empty strings made
/// only of ASCII letters and digits. A URL always contains punctuation, so
/// it is never matched.
pub fn is_base64_payload(content: &str) -> bool {
    strip_data_uri(content).is_some()
        || (!content.is_empty() && content.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Lowercased text after the last `.`, or an empty string when there is none.
pub fn file_extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Returns the base64 part of a `data:<mime>;base64,<data>` URI.
fn strip_data_uri(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("data:")?;
    let (meta, data) = rest.split_once(',')?;
    if meta.ends_with(";base64") {
        Some(data)
    } else {
        None
    }
}
