use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use giongo_completion::{CompletionService, ProviderMetadata};
use giongo_config::Config;
use giongo_lang_japanese::{ExampleGenerator, OpenAiCompletion};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use self::cli::{Cli, Commands};
use self::commands::generate::generate_deck;
use self::commands::sort::sort_deck;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = Config::new();
    cli.command.apply(&mut config);

    let result = match cli.command {
        Commands::Generate { .. } => run_generate(&config).await,
        Commands::Sort { .. } => sort_deck(&config.sort).await.map(|_| ()),
    };
    report(result)
}

/// Log a failed stage once and turn it into the process exit code
fn report(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_generate(config: &Config) -> anyhow::Result<()> {
    let completion = OpenAiCompletion::new(
        config.completion.api_key.clone(),
        config.completion.api_url.clone(),
        config.completion.model.clone(),
    );
    let provider = completion.metadata();
    ensure_api_key(&provider, &config.completion.api_key)?;
    tracing::info!("Generating with {} ({})", provider.name, provider.model);

    let generator = ExampleGenerator::new(
        completion,
        Duration::from_secs(config.completion.timeout_seconds),
    );

    // Ctrl+C stops after the current item, results so far are still saved
    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested, finishing current item");
            shutdown.cancel();
        }
    });

    generate_deck(&generator, &config.generate, cancel).await?;
    Ok(())
}

/// Refuse to start a run that would fail every request
fn ensure_api_key(provider: &ProviderMetadata, api_key: &str) -> anyhow::Result<()> {
    if provider.requires_api_key && api_key.is_empty() {
        anyhow::bail!("{} requires an API key, set OPENAI_API_KEY", provider.name);
    }
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .init();
    }
}
