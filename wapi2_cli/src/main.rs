mod commands;
mod media;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wapi2_api::{Client, ClientConfig, DEFAULT_BASE_URL};

use crate::output::{print_api_error, OutputFormat};

#[derive(Parser)]
#[command(name = "wapi2")]
#[command(about = "Send WhatsApp messages and media through the wapi2.com API")]
struct Cli {
    /// API token
    #[arg(long, env = "WAPI2_TOKEN", hide_env_values = true)]
    token: String,

    /// API base URL
    #[arg(long, env = "WAPI2_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Session ID created on wapi2.com
    #[arg(long, env = "WAPI2_SESSION_ID", global = true)]
    session: Option<String>,

    /// Accept invalid TLS certificates (self-signed gateways only)
    #[arg(long, global = true)]
    insecure: bool,

    /// Output format: pretty or json
    #[arg(long, default_value = "pretty", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the authentication state of the session
    CheckAuth,
    /// List all sessions of the account
    Sessions,
    /// Send a text message
    SendMessage(commands::chat::MessageArgs),
    /// Send an image
    SendImage(commands::chat::MediaArgs),
    /// Send a PDF document
    SendPdf(commands::chat::DocumentArgs),
    /// Send a video
    SendVideo(commands::chat::MediaArgs),
    /// Send a Word, Excel or PowerPoint document
    SendOffice(commands::chat::DocumentArgs),
    /// Send a zip archive
    SendZip(commands::chat::DocumentArgs),
    /// Send a map location
    SendLocation(commands::chat::LocationArgs),
    /// List contacts of the session
    Contacts,
    /// List groups of the session
    Groups,
    /// Check whether a phone number has WhatsApp
    IsRegistered(commands::contacts::IsRegisteredArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    if let Err(e) = init_tracing() {
        eprintln!("failed to initialise logging: {:#}", e);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<wapi2_api::Error>() {
                Some(api_err) => print_api_error(api_err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("wapi2=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let format = OutputFormat::parse(&cli.output);
    let config = ClientConfig::new(cli.token)
        .with_base_url(&cli.base_url)
        .danger_accept_invalid_certs(cli.insecure);
    let client = Client::new(config)?;
    let session = cli.session.as_deref();

    match &cli.command {
        Commands::CheckAuth => commands::session::check_auth(&client, session, &format).await,
        Commands::Sessions => commands::session::sessions(&client, &format).await,
        Commands::SendMessage(args) => {
            commands::chat::send_message(args, &client, session, &format).await
        }
        Commands::SendImage(args) => {
            commands::chat::send_image(args, &client, session, &format).await
        }
        Commands::SendPdf(args) => commands::chat::send_pdf(args, &client, session, &format).await,
        Commands::SendVideo(args) => {
            commands::chat::send_video(args, &client, session, &format).await
        }
        Commands::SendOffice(args) => {
            commands::chat::send_office(args, &client, session, &format).await
        }
        Commands::SendZip(args) => commands::chat::send_zip(args, &client, session, &format).await,
        Commands::SendLocation(args) => {
            commands::chat::send_location(args, &client, session, &format).await
        }
        Commands::Contacts => commands::contacts::contacts(&client, session, &format).await,
        Commands::Groups => commands::contacts::groups(&client, session, &format).await,
        Commands::IsRegistered(args) => {
            commands::contacts::is_registered(args, &client, session, &format).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_send_message() {
        let cli = Cli::try_parse_from([
            "wapi2",
            "--token",
            "t",
            "send-message",
            "--to",
            "34612345678",
            "--message",
            "hola",
            "--session",
            "s1",
        ])
        .unwrap();
        assert_eq!(cli.session.as_deref(), Some("s1"));
        match cli.command {
            Commands::SendMessage(args) => {
                assert_eq!(args.to, "34612345678");
                assert_eq!(args.message, "hola");
            }
            _ => panic!("expected send-message"),
        }
    }

    #[test]
    fn media_requires_url_or_file() {
        let result = Cli::try_parse_from(["wapi2", "--token", "t", "send-image", "--to", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn media_rejects_url_and_file_together() {
        let result = Cli::try_parse_from([
            "wapi2",
            "--token",
            "t",
            "send-image",
            "--to",
            "1",
            "--url",
            "https://example.com/a.jpg",
            "--file",
            "a.jpg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_location_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "wapi2",
            "--token",
            "t",
            "send-location",
            "--to",
            "1",
            "--latitude",
            "40.4168",
            "--longitude=-3.7038",
        ])
        .unwrap();
        match cli.command {
            Commands::SendLocation(args) => {
                assert_eq!(args.latitude, 40.4168);
                assert_eq!(args.longitude, -3.7038);
                assert!(args.description.is_none());
            }
            _ => panic!("expected send-location"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wapi2",
            "--token",
            "t",
            "--base-url",
            "http://localhost:3000/",
            "groups",
            "--insecure",
            "--output",
            "json",
        ])
        .unwrap();
        assert!(cli.insecure);
        assert_eq!(cli.output, "json");
        assert_eq!(cli.base_url, "http://localhost:3000/");
        assert!(matches!(cli.command, Commands::Groups));
    }
}
