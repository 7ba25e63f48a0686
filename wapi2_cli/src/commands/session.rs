use anyhow::Result;
use wapi2_api::Client;

use super::require_session;
use crate::output::{print_json, OutputFormat};

pub async fn check_auth(
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let session_id = require_session(session)?;
    let resp = client.check_auth(session_id).await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn sessions(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_sessions().await?;
    print_json(&resp, format);
    Ok(())
}
