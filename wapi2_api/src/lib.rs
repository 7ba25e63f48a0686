//! Client for the wapi2.com WhatsApp messaging API.
//!
//! [`Client`] wraps the session, chat and contact endpoints. Media sends are
//! validated locally (filename, caption, format, decoded size) before any
//! request is made, and every failure surfaces as an [`Error`] with a
//! numeric code.

mod client;
mod config;
mod errors;
mod request;
pub mod transport;
pub mod types;
pub mod validation;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::errors::{Error, ErrorCode};
pub use self::request::{Method, RequestSpec};
pub use self::transport::{HttpRequest, HttpResponse, HttpTransport, Transport, TransportError};
