//! JSON bodies for the `/chat/{to}/...` endpoints.
//!
//! Media fields hold either a URL or base64 content (raw or as a data URI).

use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}

#[derive(Serialize, Debug, Clone)]
pub struct ImageBody<'a> {
    pub image: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct PdfBody<'a> {
    pub pdf: &'a str,
    pub filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct VideoBody<'a> {
    pub video: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

/// Body shared by office documents and zip archives.
#[derive(Serialize, Debug, Clone)]
pub struct DocumentBody<'a> {
    pub document: &'a str,
    pub filename: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct LocationBody<'a> {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}
