use anyhow::Result;
use clap::{Parser, Subcommand};
use nexus_cli::{app, Theme};
use nexus_core::{CredentialSource, Settings, SettingsCredentials};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexus-chat")]
#[command(about = "Nexus AI Chat - a side-panel chat with Gemini")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Model to use instead of the configured one
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Color theme (dark, tokyo-night, dracula)
    #[arg(long, global = true)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the chat panel (default)
    Open,
    /// Send a single prompt and print the reply
    Ask { prompt: String },
    /// Show where settings live and whether an API key is available
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Settings::config_path);
    let mut settings = Settings::load_from(&config_path);
    if let Some(model) = cli.model {
        settings.chat.model = model;
    }
    let theme = cli.theme.unwrap_or_else(|| settings.panel.theme.clone());
    let credentials = SettingsCredentials::new(&config_path);

    match cli.command.unwrap_or(Command::Open) {
        Command::Open => app::run_panel(settings, credentials, &theme).await?,
        Command::Ask { prompt } => app::run_single_prompt(&settings, credentials, &prompt).await?,
        Command::Config => {
            let client = settings.build_client();
            println!("settings: {}", config_path.display());
            println!("model:    {}", client.model());
            println!("endpoint: {}", client.endpoint());
            println!("themes:   {}", Theme::all_names().join(", "));
            match credentials.api_key() {
                Some(_) => println!("api key:  set"),
                None => println!(
                    "api key:  missing (set chat.api_key or ${})",
                    settings.chat.api_key_env
                ),
            }
        }
    }

    Ok(())
}
