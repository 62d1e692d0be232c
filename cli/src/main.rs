//! CLI entrypoint for tavily-tool
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use commands::{Cli, Command};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tavily_application::WebSearchUseCase;
use tavily_domain::{Severity, settings_schema, tavily_search_definition};
use tavily_infrastructure::{
    ConfigLoader, FileConfig, HostToolContext, OpenAiCompatibleGateway, SettingsSource,
    TavilyClient,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_ref())?;

    let config = load_config(&cli)?;
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue),
            Severity::Warning => warn!("{}", issue),
        }
    }

    match cli.command {
        Command::Search { query, settings } => {
            if FileConfig::has_errors(&issues) {
                bail!("Invalid configuration (run `tavily-tool config` for details)");
            }
            let query = Command::query_text(&query);
            let html = run_search(&config, &query, settings).await?;
            println!("{}", html);
        }
        Command::Schema { field, defaults } => {
            let schema = settings_schema();
            let output = match (field, defaults) {
                (Some(key), _) => match schema.field(&key) {
                    Some(f) => serde_json::to_string_pretty(f)?,
                    None => bail!("Unknown settings field: {}", key),
                },
                (None, true) => serde_json::to_string_pretty(&schema.defaults())?,
                (None, false) => serde_json::to_string_pretty(&schema)?,
            };
            println!("{}", output);
        }
        Command::ToolInfo => {
            println!("{}", serde_json::to_string_pretty(&tavily_search_definition())?);
        }
        Command::Config => {
            if cli.no_config {
                println!("Configuration files disabled (--no-config)");
            } else {
                ConfigLoader::print_config_sources(cli.config.as_deref());
            }
            println!();
            println!("Effective configuration:");
            println!("{}", toml::to_string_pretty(&config.redacted())?);

            if issues.is_empty() {
                println!("No problems found.");
            } else {
                println!("Problems:");
                for issue in issues {
                    println!("  {}", issue);
                }
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))
}

async fn run_search(config: &FileConfig, query: &str, settings: Option<PathBuf>) -> Result<String> {
    // === Dependency Injection ===
    let backend = TavilyClient::new(
        config.tavily.base_url.clone(),
        Duration::from_secs(config.tavily.timeout_secs),
    )?;
    let gateway = OpenAiCompatibleGateway::new(
        config
            .llm
            .to_gateway_config(|name| std::env::var(name).ok()),
    )?;
    info!(
        model = gateway.model(),
        backend = backend.base_url(),
        "Adapters ready"
    );

    let settings = match settings {
        Some(path) => SettingsSource::File(path),
        None => SettingsSource::Fixed(config.tavily.to_settings()),
    };
    let ctx = HostToolContext::new(settings, Arc::new(gateway));
    let use_case = WebSearchUseCase::new(Arc::new(backend));

    Ok(use_case.execute(query, &ctx).await)
}
