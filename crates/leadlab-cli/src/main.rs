//! LeadLab command-line client.
//!
//! A terminal host for the lead-capture pipeline: `submit` drives the same
//! form controller the website embeds, `leads` fetches what the backend has
//! recorded.

#![allow(clippy::print_stdout)]

use anyhow::Context;
use clap::{Parser, Subcommand};

use leadlab_client::{
    GENERIC_FAILURE_MESSAGE, LeadField, LeadForm, LeadFormConfig, SubmitOutcome,
};
use leadlab_storage::Lead;

#[derive(Parser)]
#[command(name = "leadlab", version, about = "LeadLab lead-capture client")]
struct Cli {
    /// Base URL of the LeadLab backend.
    #[arg(long, global = true, env = "LEADLAB_URL", default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one lead, exactly as the site's contact form would.
    Submit {
        /// Visitor name.
        #[arg(long)]
        name: String,
        /// Visitor email address.
        #[arg(long)]
        email: String,
        /// Message to send.
        #[arg(long)]
        message: String,
    },
    /// List captured leads.
    Leads,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Submit {
            name,
            email,
            message,
        } => submit(&cli.url, name, email, message).await,
        Command::Leads => list(&cli.url).await,
    }
}

async fn submit(url: &str, name: String, email: String, message: String) -> anyhow::Result<()> {
    let form = LeadForm::new(LeadFormConfig::new(url))?;
    form.update_field(LeadField::Name, name).await;
    form.update_field(LeadField::Email, email).await;
    form.update_field(LeadField::Message, message).await;

    anyhow::ensure!(
        form.draft().await.is_complete(),
        "name, email and message are all required"
    );

    match form.submit().await {
        SubmitOutcome::Accepted { message } => {
            println!("{message}");
            Ok(())
        }
        SubmitOutcome::Rejected | SubmitOutcome::TransportFailed => {
            anyhow::bail!("{GENERIC_FAILURE_MESSAGE}")
        }
        SubmitOutcome::Dropped => anyhow::bail!("a submission is already in flight"),
    }
}

async fn list(url: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/leads", url.trim_end_matches('/'));
    let leads: Vec<Lead> = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to reach {url}"))?
        .error_for_status()
        .context("backend refused the listing request")?
        .json()
        .await
        .context("malformed listing response")?;

    println!("{}", serde_json::to_string_pretty(&leads)?);
    Ok(())
}
