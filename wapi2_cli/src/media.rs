//! Turns `--url` / `--file` arguments into the media string the API expects.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wapi2_api::validation::file_extension;

/// Where a media payload comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaSource {
    Url(String),
    File(PathBuf),
}

impl MediaSource {
    pub fn from_args(url: Option<&str>, file: Option<&Path>) -> Result<Self> {
        match (url, file) {
            (Some(url), None) => Ok(MediaSource::Url(url.to_string())),
            (None, Some(file)) => Ok(MediaSource::File(file.to_path_buf())),
            (Some(_), Some(_)) => Err(anyhow!("--url and --file cannot be used together")),
            (None, None) => Err(anyhow!("one of --url or --file is required")),
        }
    }

    /// URL as-is, or the file read and encoded as a base64 data URI.
    pub fn load(&self) -> Result<String> {
        match self {
            MediaSource::Url(url) => Ok(url.clone()),
            MediaSource::File(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                tracing::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
                Ok(data_uri(mime_type(&path.to_string_lossy()), &bytes))
            }
        }
    }

    /// Filename to send when none was given: the local file name or the last URL segment.
    pub fn default_filename(&self) -> Option<String> {
        match self {
            MediaSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            MediaSource::Url(url) => {
                let rest = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
                let rest = rest.split(['?', '#']).next().unwrap_or_default();
                let (_, path) = rest.split_once('/')?;
                path.rsplit('/')
                    .next()
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
            }
        }
    }
}

pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// MIME type for the media kinds WhatsApp accepts, keyed by extension.
pub fn mime_type(filename: &str) -> &'static str {
    match file_extension(filename).as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "mov" => "video/quicktime",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn source_requires_exactly_one() {
        assert_eq!(
            MediaSource::from_args(Some("https://example.com/a.jpg"), None).unwrap(),
            MediaSource::Url("https://example.com/a.jpg".to_string())
        );
        assert!(MediaSource::from_args(None, None).is_err());
        assert!(MediaSource::from_args(Some("u"), Some(Path::new("f"))).is_err());
    }

    #[test]
    fn url_loads_unchanged() {
        let source = MediaSource::Url("https://example.com/video.mp4".to_string());
        assert_eq!(source.load().unwrap(), "https://example.com/video.mp4");
    }

    #[test]
    fn file_loads_as_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"Hello").unwrap();

        let loaded = MediaSource::File(path).load().unwrap();
        assert_eq!(loaded, "data:application/pdf;base64,SGVsbG8=");
    }

    #[test]
    fn missing_file_is_error() {
        let source = MediaSource::File(PathBuf::from("/definitely/not/here.png"));
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn default_filename_from_file() {
        let source = MediaSource::File(PathBuf::from("/tmp/reports/q3.xlsx"));
        assert_eq!(source.default_filename().as_deref(), Some("q3.xlsx"));
    }

    #[test]
    fn default_filename_from_url() {
        let source = MediaSource::Url("https://example.com/files/report.pdf?token=abc".to_string());
        assert_eq!(source.default_filename().as_deref(), Some("report.pdf"));

        let source = MediaSource::Url("https://example.com/files/".to_string());
        assert_eq!(source.default_filename(), None);

        let source = MediaSource::Url("https://example.com".to_string());
        assert_eq!(source.default_filename(), None);
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_type("photo.JPG"), "image/jpeg");
        assert_eq!(mime_type("clip.mp4"), "video/mp4");
        assert_eq!(
            mime_type("deck.pptx"),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        );
        assert_eq!(mime_type("archive.zip"), "application/zip");
        assert_eq!(mime_type("blob"), "application/octet-stream");
    }
}
