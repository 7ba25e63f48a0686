//! HTTP client for the wapi2.com WhatsApp API.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ClientConfig,
    request::RequestSpec,
    transport::{HttpRequest, HttpTransport, Transport},
    types::{DocumentBody, ImageBody, LocationBody, MessageBody, PdfBody, VideoBody},
    validation::{self, OFFICE_EXTENSIONS, PDF_EXTENSIONS, ZIP_EXTENSIONS},
    Error,
};

/// HTTP client for the wapi2.com API.
///
/// Every operation validates its input, then performs exactly one request
/// and returns the decoded JSON body. Nothing is retried or cached.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client backed by [`HttpTransport`].
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.accepts_invalid_certs()).map_err(|e| {
            Error::new(format!("Failed to build HTTP client: {}", e), 0)
        })?;
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn http_request(&self, spec: &RequestSpec) -> Result<HttpRequest, Error> {
        let url = spec.url(self.config.base_url()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::unclassified(format!("Request error: invalid URL ({})", e))
        })?;
        Ok(HttpRequest {
            method: spec.method,
            url,
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.auth_token()),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ],
            body: spec.payload(),
        })
    }

    /// Sends one request and normalizes the outcome.
    ///
    /// Transport failures and undecodable bodies come back with code `0`;
    /// a status of 400 or above comes back with the status as code, the
    /// server's `message` field as message and the decoded body as error data.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Value, Error> {
        let request = self.http_request(&spec)?;
        tracing::debug!("{} {}", spec.method, spec.path);

        let resp = self.transport.send(request).await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", spec.method, spec.path, e);
            Error::unclassified(format!("Request error: {}", e))
        })?;

        let decoded: Value = serde_json::from_str(&resp.body).map_err(|e| {
            tracing::error!(
                "Failed to decode response: {} | body: {}",
                e,
                truncate_body(&resp.body)
            );
            Error::unclassified("Failed to decode JSON response")
        })?;

        if resp.status >= 400 {
            tracing::error!(
                "Request failed with status {}: {}",
                resp.status,
                truncate_body(&resp.body)
            );
            let message = decoded
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Request error")
                .to_string();
            return Err(Error::http_status(resp.status, message, decoded));
        }

        Ok(decoded)
    }

    async fn post_chat<B: Serialize>(
        &self,
        to: &str,
        kind: &str,
        body: &B,
        session_id: &str,
    ) -> Result<Value, Error> {
        let body = serde_json::to_value(body)
            .map_err(|e| Error::unclassified(format!("Failed to encode request body: {}", e)))?;
        self.execute(
            RequestSpec::post(format!("/chat/{}/{}", to, kind), body).with_session(session_id),
        )
        .await
    }

    /// Checks the authentication state of a session.
    pub async fn check_auth(&self, session_id: &str) -> Result<Value, Error> {
        self.execute(RequestSpec::get(format!("/auth/checkauth/{}", session_id)))
            .await
    }

    /// Lists every session created for this account.
    pub async fn get_sessions(&self) -> Result<Value, Error> {
        self.execute(RequestSpec::get("/auth/getsessions")).await
    }

    /// Sends a text message.
    pub async fn send_message(
        &self,
        to: &str,
        message: &str,
        session_id: &str,
    ) -> Result<Value, Error> {
        self.post_chat(to, "message", &MessageBody { message }, session_id)
            .await
    }

    /// Sends an image given as a URL or base64 content.
    pub async fn send_image(
        &self,
        to: &str,
        image: &str,
        caption: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        validation::validate_caption(caption)?;
        validate_inline_size(image)?;
        self.post_chat(to, "image", &ImageBody { image, caption }, session_id)
            .await
    }

    /// Sends a PDF given as a URL or base64 content.
    pub async fn send_pdf(
        &self,
        to: &str,
        pdf: &str,
        filename: &str,
        caption: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        validate_named_file(filename, PDF_EXTENSIONS, caption, pdf)?;
        self.post_chat(
            to,
            "pdf",
            &PdfBody {
                pdf,
                filename,
                caption,
            },
            session_id,
        )
        .await
    }

    /// Sends a video given as a URL or base64 content.
    pub async fn send_video(
        &self,
        to: &str,
        video: &str,
        caption: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        validation::validate_caption(caption)?;
        validate_inline_size(video)?;
        self.post_chat(to, "video", &VideoBody { video, caption }, session_id)
            .await
    }

    /// Sends a Word, Excel or PowerPoint document.
    pub async fn send_office_document(
        &self,
        to: &str,
        document: &str,
        filename: &str,
        caption: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        validate_named_file(filename, OFFICE_EXTENSIONS, caption, document)?;
        self.post_chat(
            to,
            "office",
            &DocumentBody {
                document,
                filename,
                caption,
            },
            session_id,
        )
        .await
    }

    /// Sends a zip archive.
    pub async fn send_zip_file(
        &self,
        to: &str,
        document: &str,
        filename: &str,
        caption: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        validate_named_file(filename, ZIP_EXTENSIONS, caption, document)?;
        self.post_chat(
            to,
            "zip",
            &DocumentBody {
                document,
                filename,
                caption,
            },
            session_id,
        )
        .await
    }

    /// Sends a map location.
    pub async fn send_location(
        &self,
        to: &str,
        latitude: f64,
        longitude: f64,
        description: Option<&str>,
        session_id: &str,
    ) -> Result<Value, Error> {
        self.post_chat(
            to,
            "location",
            &LocationBody {
                latitude,
                longitude,
                description,
            },
            session_id,
        )
        .await
    }

    /// Lists the contacts of a session.
    pub async fn get_contacts(&self, session_id: &str) -> Result<Value, Error> {
        self.execute(RequestSpec::get("/contact/getcontacts").with_session(session_id))
            .await
    }

    /// Lists the groups a session belongs to.
    pub async fn get_groups(&self, session_id: &str) -> Result<Value, Error> {
        self.execute(RequestSpec::get("/contact/getgroups").with_session(session_id))
            .await
    }

    /// Checks whether `phone` has a WhatsApp account.
    pub async fn is_registered_user(&self, phone: &str, session_id: &str) -> Result<Value, Error> {
        self.execute(
            RequestSpec::get(format!("/contact/isregistereduser/{}", phone))
                .with_session(session_id),
        )
        .await
    }
}

/// Size check for inline payloads. URLs are left to the server.
fn validate_inline_size(content: &str) -> Result<(), Error> {
    if validation::is_base64_payload(content) {
        validation::validate_file_size(content)?;
    }
    Ok(())
}

fn validate_named_file(
    filename: &str,
    allowed: &[&str],
    caption: Option<&str>,
    content: &str,
) -> Result<(), Error> {
    validation::validate_filename(filename)?;
    validation::validate_file_format(filename, allowed)?;
    validation::validate_caption(caption)?;
    validate_inline_size(content)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_body("{}"), "{}");
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(2500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert_eq!(out.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }

    #[test]
    fn inline_size_skips_urls() {
        assert!(validate_inline_size("https://example.com/huge.mp4").is_ok());
    }

    #[test]
    fn client_builds_with_default_transport() {
        let client = Client::new(ClientConfig::new("t")).unwrap();
        assert_eq!(client.config().base_url(), "https://wapi2.com");
    }
}
