//! CLI subcommand implementations.

pub mod chat;
pub mod contacts;
pub mod session;

use anyhow::{anyhow, Result};

/// The session ID, which every chat and contact endpoint needs.
pub fn require_session(session: Option<&str>) -> Result<&str> {
    session.ok_or_else(|| {
        anyhow!("a session ID is required: pass --session or set WAPI2_SESSION_ID")
    })
}
