mod display;

use std::sync::Arc;

use accord_core::{DocumentId, UserId};
use accord_rpc::{
    AcceptanceLogClient, HttpGateway, HttpGatewayConfig, StaticUserAgent, default_user_agent,
};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "accord", version, about = "Terms and privacy acceptance logging")]
struct Cli {
    /// Backend project URL.
    #[arg(long, env = "ACCORD_RPC_URL")]
    url: String,

    /// Public API key.
    #[arg(long, env = "ACCORD_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Access token of the signed-in user.
    #[arg(long, env = "ACCORD_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// User agent recorded with each event. Blank uses the client default.
    #[arg(long, env = "ACCORD_USER_AGENT")]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Terms of use.
    #[command(subcommand)]
    Terms(TermsCommand),
    /// Privacy policy.
    #[command(subcommand)]
    Privacy(PrivacyCommand),
}

#[derive(Subcommand)]
enum TermsCommand {
    /// Show the active terms document.
    Active,
    /// List terms versions.
    Versions {
        #[arg(long, default_value_t = accord_rpc::DEFAULT_VERSIONS_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Record that a user accepted the terms.
    Accept(AcceptArgs),
    /// Record that the terms were shown.
    View(ViewArgs),
}

#[derive(Subcommand)]
enum PrivacyCommand {
    /// Record that a user accepted the privacy policy.
    Accept(AcceptArgs),
    /// Record that the privacy policy was shown.
    View(ViewArgs),
}

#[derive(Args)]
struct AcceptArgs {
    document_id: DocumentId,
    #[arg(long)]
    user: UserId,
}

#[derive(Args)]
struct ViewArgs {
    document_id: DocumentId,
    /// Omit for anonymous views.
    #[arg(long)]
    user: Option<UserId>,
}

fn resolve_user_agent(flag: Option<String>) -> String {
    flag.filter(|ua| !ua.trim().is_empty())
        .unwrap_or_else(default_user_agent)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("accord v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let gateway = HttpGateway::new(HttpGatewayConfig {
        base_url: cli.url,
        api_key: cli.api_key,
        access_token: cli.access_token,
    });
    let user_agent = StaticUserAgent(resolve_user_agent(cli.user_agent));
    let client = AcceptanceLogClient::new(Arc::new(gateway), Arc::new(user_agent));

    match cli.command {
        Command::Terms(TermsCommand::Active) => {
            match client
                .fetch_active_terms()
                .await
                .context("fetching active terms")?
            {
                Some(doc) => print!("{}", display::render_terms_card(&doc)),
                None => println!("no active terms"),
            }
        }
        Command::Terms(TermsCommand::Versions { limit, offset }) => {
            let versions = client
                .fetch_terms_versions(limit, offset)
                .await
                .context("listing terms versions")?
                .unwrap_or_default();
            print!("{}", display::render_versions_table(&versions));
        }
        Command::Terms(TermsCommand::Accept(args)) => {
            client
                .log_terms_accept(&args.document_id, &args.user)
                .await
                .context("logging terms acceptance")?;
            println!("terms {} accepted by {}", args.document_id, args.user);
        }
        Command::Terms(TermsCommand::View(args)) => {
            client
                .log_terms_view(&args.document_id, args.user.as_ref())
                .await
                .context("logging terms view")?;
            println!("terms {} viewed", args.document_id);
        }
        Command::Privacy(PrivacyCommand::Accept(args)) => {
            client
                .log_privacy_accept(&args.document_id, &args.user)
                .await
                .context("logging privacy acceptance")?;
            println!("privacy policy {} accepted by {}", args.document_id, args.user);
        }
        Command::Privacy(PrivacyCommand::View(args)) => {
            client
                .log_privacy_view(&args.document_id, args.user.as_ref())
                .await
                .context("logging privacy view")?;
            println!("privacy policy {} viewed", args.document_id);
        }
    }

    Ok(())
}
