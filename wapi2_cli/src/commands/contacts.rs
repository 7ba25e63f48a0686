use anyhow::Result;
use clap::Args;
use wapi2_api::Client;

use super::require_session;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct IsRegisteredArgs {
    /// Phone number in international format without '+' (e.g. 34612345678)
    #[arg(long)]
    pub phone: String,
}

pub async fn contacts(
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.get_contacts(require_session(session)?).await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn groups(
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.get_groups(require_session(session)?).await?;
    print_json(&resp, format);
    Ok(())
}

pub async fn is_registered(
    args: &IsRegisteredArgs,
    client: &Client,
    session: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client
        .is_registered_user(&args.phone, require_session(session)?)
        .await?;
    print_json(&resp, format);
    Ok(())
}
