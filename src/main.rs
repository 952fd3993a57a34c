//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishguard` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use phishguard::initialization::{init_crypto_provider, init_logger_with};
use phishguard::server::start_server;
use phishguard::{EngineConfig, LogFormat, LogLevel, ScanEngine};

#[derive(Debug, Parser)]
#[command(name = "phishguard", about = "URL phishing risk scoring")]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// Path to a JSON file overriding scoring configuration
    #[arg(long, global = true)]
    scoring_config: Option<PathBuf>,

    /// Resolve hosts through the OS resolver instead of hickory
    #[arg(long, global = true)]
    system_dns: bool,

    /// Per-request HTTP timeout in seconds
    #[arg(long, global = true)]
    timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Maximum concurrent scans in a batch
    #[arg(long, global = true)]
    max_concurrency: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan one or more URLs and print JSON assessments
    Scan(ScanCommand),
    /// Run the HTTP API server
    Serve(ServeCommand),
}

#[derive(Debug, Parser)]
struct ScanCommand {
    /// URLs to scan
    urls: Vec<String>,

    /// Read URLs from a file (one per line, `#` comments skipped)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Also fetch and analyze page content
    #[arg(long)]
    content: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Parser)]
struct ServeCommand {
    /// Port to bind on 127.0.0.1
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present (reputation API key)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    // Must precede any TLS connection
    init_crypto_provider();

    let config = build_config(&cli)?;
    let engine = ScanEngine::new(config).context("Failed to initialize scan engine")?;

    let outcome = match cli.command {
        Command::Scan(ref scan) => run_scan(&engine, scan).await,
        Command::Serve(ref serve) => start_server(serve.port, Arc::new(engine)).await,
    };

    if let Err(e) = outcome {
        eprintln!("phishguard error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

/// Assembles the engine configuration from defaults, the optional config
/// file, and CLI overrides (CLI wins).
fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.scoring_config {
        Some(path) => EngineConfig::from_json_file(path)?,
        None => EngineConfig::default(),
    };

    if cli.system_dns {
        config.use_system_dns = true;
    }
    if let Some(timeout) = cli.timeout_seconds {
        config.http_timeout_secs = timeout;
    }
    if let Some(ref user_agent) = cli.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(max_concurrency) = cli.max_concurrency {
        config.max_concurrency = max_concurrency;
    }

    Ok(config)
}

async fn run_scan(engine: &ScanEngine, command: &ScanCommand) -> Result<()> {
    let mut urls = command.urls.clone();
    if let Some(ref path) = command.file {
        urls.extend(read_url_file(path).await?);
    }
    if urls.is_empty() {
        anyhow::bail!("No URLs to scan: pass URLs as arguments or use --file");
    }

    let mut output: HashMap<String, serde_json::Value> = HashMap::new();
    if urls.len() == 1 && command.content {
        // Content analysis is only available for single-URL scans
        let url = &urls[0];
        let value = match engine.scan(url, true).await {
            Ok(assessment) => serde_json::to_value(&assessment)?,
            Err(e) => json!({"error": e.to_string()}),
        };
        output.insert(url.clone(), value);
    } else {
        if command.content && urls.len() > 1 {
            log::warn!("--content is ignored for batch scans");
        }
        for (url, result) in engine.scan_batch(&urls).await {
            let value = match result {
                Ok(assessment) => serde_json::to_value(&assessment)?,
                Err(e) => json!({"error": e.to_string()}),
            };
            output.insert(url, value);
        }
    }

    let rendered = if command.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    engine.stats().log_summary();

    Ok(())
}

/// Reads newline-delimited URLs, skipping blanks and `#` comments.
async fn read_url_file(path: &PathBuf) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read URL file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
