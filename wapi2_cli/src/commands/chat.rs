use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use wapi2_api::Client;

use super::require_session;
use crate::media::MediaSource;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct MessageArgs {
    /// Destination phone number or group ID
    #[arg(long)]
    pub to: String,

    /// Message text
    #[arg(long)]
    pub message: String,
}

#[derive(Args)]
pub struct MediaArgs {
    /// Destination phone number or group ID
    #[arg(long)]
    pub to: String,

    /// Public URL of the media
    #[arg(long, required_unless_present = "file", conflicts_with = "file")]
    pub url: Option<String>,

    /// Local file to upload inline as base64
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Caption shown under the media (max 1024 characters)
    #[arg(long)]
    pub caption: Option<String>,
}

#[derive(Args)]
pub struct DocumentArgs {
    #[command(flatten)]
    pub media: MediaArgs,

    /// Filename shown to the recipient. Defaults to the file or URL name.
    #[arg(long)]
    pub filename: Option<String>,
}

#[derive(Args)]
pub struct LocationArgs {
    /// Destination phone number or group ID
    #[arg(long)]
    pub to: String,

    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Place name or address
    #[arg(long)]
    pub description: Option<String>,
}

impl MediaArgs {
    fn source(&self) -> Result<MediaSource> {
        MediaSource::from_args(self.url.as_deref(), self.file.as_deref())
    }
}

/// Loaded payload plus the filename to send with it.
struct Document {
    content: String,
    filename: String,
}

impl DocumentArgs {
    fn load(&self) -> Result<Document> {
        let source = self.media.source()?;
        let filename = match &self.filename {
            Some(name) => name.clone(),
            None => source
                .default_filename()
                .ok_or_else(|| anyhow!("cannot derive a filename, pass --filename"))?,
        };
        Ok(Document {
            content: source.load()?,
            filename,
        })
    }
}

pub async fn send_message(
    args: &MessageArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client
        .send_message(&args.to, &args.message, require_session(session)?)
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_image(
    args: &MediaArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let image = args.source()?.load()?;
    let resp = client
        .send_image(&args.to, &image, args.caption.as_deref(), session_id)
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_video(
    args: &MediaArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let video = args.source()?.load()?;
    let resp = client
        .send_video(&args.to, &video, args.caption.as_deref(), session_id)
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_pdf(
    args: &DocumentArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let doc = args.load()?;
    let resp = client
        .send_pdf(
            &args.media.to,
            &doc.content,
            &doc.filename,
            args.media.caption.as_deref(),
            session_id,
        )
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_office(
    args: &DocumentArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let doc = args.load()?;
    let resp = client
        .send_office_document(
            &args.media.to,
            &doc.content,
            &doc.filename,
            args.media.caption.as_deref(),
            session_id,
        )
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_zip(
    args: &DocumentArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let doc = args.load()?;
    let resp = client
        .send_zip_file(
            &args.media.to,
            &doc.content,
            &doc.filename,
            args.media.caption.as_deref(),
            session_id,
        )
        .await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn send_location(
    args: &LocationArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client
        .send_location(
            &args.to,
            args.latitude,
            args.longitude,
            args.description.as_deref(),
            require_session(session)?,
        )
        .await?;
    print_json(&resp, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document_args(
        url: Option<&str>,
        file: Option<&str>,
        filename: Option<&str>,
    ) -> DocumentArgs {
        DocumentArgs {
            media: MediaArgs {
                to: "34612345678".to_string(),
                url: url.map(str::to_string),
                file: file.map(PathBuf::from),
                caption: None,
            },
            filename: filename.map(str::to_string),
        }
    }

    #[test]
    fn explicit_filename_wins() {
        let args = document_args(Some("https://example.com/x.docx"), None, Some("report.docx"));
        let doc = args.load().unwrap();
        assert_eq!(doc.filename, "report.docx");
        assert_eq!(doc.content, "https://example.com/x.docx");
    }

    #[test]
    fn filename_derived_from_url() {
        let args = document_args(Some("https://example.com/files/archive.zip"), None, None);
        assert_eq!(args.load().unwrap().filename, "archive.zip");
    }

    #[test]
    fn filename_derived_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.pptx");
        std::fs::write(&path, b"pptx").unwrap();

        let args = document_args(None, path.to_str(), None);
        let doc = args.load().unwrap();
        assert_eq!(doc.filename, "slides.pptx");
        assert!(doc.content.starts_with(
            "data:application/vnd.openxmlformats-officedocument.presentationml.presentation;base64,"
        ));
    }

    #[test]
    fn underivable_filename_is_error() {
        let args = document_args(Some("https://example.com/"), None, None);
        assert!(args.load().is_err());
    }
}
