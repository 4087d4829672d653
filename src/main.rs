//! fanlog command-line front end.
//!
//! # Architecture Overview
//!
//! ```text
//!   argv / stdin (NDJSON)
//!        │
//!        ▼
//!   ┌──────────┐     ┌───────────────┐     ┌────────────┐     ┌──────────────┐
//!   │  config  │────▶│ LogContext    │────▶│ Dispatcher │────▶│ ConsoleSink  │
//!   │ (TOML)   │     │ root / scopes │     │ (arc-swap) │──┬─▶│ RemoteSink   │──▶ collector
//!   └────┬─────┘     └───────────────┘     └────────────┘  └─▶│ BridgeSink   │
//!        │ watcher (notify)                      ▲             └──────────────┘
//!        └───────────── replace_all ─────────────┘
//! ```

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use fanlog::config::{load_config, ConfigWatcher, FanlogConfig};
use fanlog::observability::{logging, metrics};
use fanlog::{Configuration, Level, LogEvent};

#[derive(Parser)]
#[command(name = "fanlog")]
#[command(about = "Fan structured log events out to console and remote sinks", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults to a single console sink at info.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds to wait before exit so in-flight remote sends can finish.
    #[arg(long, default_value_t = 250)]
    linger_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a single event
    Emit {
        #[arg(short, long, default_value = "info")]
        level: Level,

        #[arg(short, long)]
        message: String,

        /// JSON object used as the event's data
        #[arg(short, long)]
        data: Option<String>,

        /// Scope metadata as key=value (value parsed as JSON when possible)
        #[arg(long = "meta", value_parser = parse_meta)]
        meta: Vec<(String, Value)>,
    },
    /// Read NDJSON events ({"level"?, "message", "data"}) from stdin
    Pipe {
        /// Reload transports when the config file changes
        #[arg(long)]
        watch: bool,
    },
    /// Validate the config and list the transports it builds
    Check,
}

fn parse_meta(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err("metadata key must not be empty".to_string());
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

fn load(path: Option<&Path>) -> Result<FanlogConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(FanlogConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(cli.config.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let transports = config.build_transports()?;
    tracing::debug!(transports = transports.len(), "Configuration loaded");

    match cli.command {
        Commands::Check => {
            print_summary(&config);
            return Ok(());
        }
        Commands::Emit {
            level,
            message,
            data,
            meta,
        } => {
            fanlog::configure(Configuration::with_transports(transports));

            let data = match data {
                Some(raw) => match serde_json::from_str::<Value>(&raw)? {
                    Value::Object(map) => map,
                    _ => return Err("--data must be a JSON object".into()),
                },
                None => Map::new(),
            };
            let scope = fanlog::get_or_create_scope(meta.into_iter().collect::<Map<_, _>>());
            scope.log(level, LogEvent::new(message).with_data(data));
        }
        Commands::Pipe { watch } => {
            fanlog::configure(Configuration::with_transports(transports));
            run_pipe(cli.config.as_deref(), watch).await?;
        }
    }

    tokio::time::sleep(Duration::from_millis(cli.linger_ms)).await;
    Ok(())
}

async fn run_pipe(config_path: Option<&Path>, watch: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_watcher, mut updates) = match (watch, config_path) {
        (true, Some(path)) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            (Some(watcher.run()?), Some(rx))
        }
        (true, None) => {
            tracing::warn!("--watch needs --config; hot reload disabled");
            (None, None)
        }
        (false, _) => (None, None),
    };

    let root = fanlog::get_or_create_scope(None);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                line_no += 1;
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = pipe_line(&root, &line) {
                    eprintln!("line {}: {}", line_no, e);
                }
            }
            Some(new_config) = next_update(&mut updates) => {
                match new_config.build_transports() {
                    Ok(transports) => {
                        tracing::info!(transports = transports.len(), "Transports reloaded");
                        fanlog::configure(Configuration::with_transports(transports));
                    }
                    Err(e) => tracing::error!(error = %e, "Reloaded config unusable; keeping current transports"),
                }
            }
        }
    }

    Ok(())
}

async fn next_update(
    updates: &mut Option<tokio::sync::mpsc::UnboundedReceiver<FanlogConfig>>,
) -> Option<FanlogConfig> {
    match updates {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

fn pipe_line(root: &fanlog::Logger, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value: Value = serde_json::from_str(line)?;
    let level = match value.get("level") {
        None => Level::Info,
        Some(Value::String(s)) => s.parse()?,
        Some(_) => return Err("field 'level' must be a string".into()),
    };
    root.log_value(level, &value)?;
    Ok(())
}

fn print_summary(config: &FanlogConfig) {
    println!("config ok");
    if config.console.enabled {
        println!(
            "  console  level={}",
            config.console.level.unwrap_or(Level::DEFAULT_THRESHOLD)
        );
    }
    for remote in &config.remote {
        println!(
            "  remote   level={} url={} headers={}",
            remote.level.unwrap_or(Level::DEFAULT_THRESHOLD),
            remote.url,
            remote.headers.len()
        );
    }
}
