use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nadbench_core::{AboutContent, Config, builtin_catalog};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "nadbench")]
#[command(about = "Terminal companion for the NADBenchmarks natural-disaster dataset catalog")]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Launch the interactive TUI (the default when no command is given)
  Tui,
  /// Print the NADBenchmarks citation
  Reference {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// List the built-in dataset catalog
  Datasets {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

/// Get the nadbench data directory (respects env vars)
fn data_dir() -> PathBuf {
  if let Ok(path) = std::env::var("NADBENCH_DATA_DIR") {
    return PathBuf::from(path);
  }
  dirs::data_local_dir()
    .map(|p| p.join("nadbench"))
    .unwrap_or_else(|| PathBuf::from("."))
}

/// Initialize logging for CLI commands (console only)
fn init_cli_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
    .init();
}

/// Initialize file logging for the TUI; a console subscriber would write
/// into the alternate screen. Returns the guard that must be kept alive
/// for the duration of the program.
fn init_tui_logging() -> Option<WorkerGuard> {
  let log_dir = data_dir();
  if std::fs::create_dir_all(&log_dir).is_err() {
    return None;
  }

  let file_appender = tracing_appender::rolling::daily(&log_dir, "nadbench.log");
  let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

  let env_filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

  let file_layer = tracing_subscriber::fmt::layer()
    .with_target(true)
    .with_ansi(false)
    .with_writer(file_writer);

  tracing_subscriber::registry().with(env_filter).with(file_layer).init();

  Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let command = cli.command.unwrap_or(Commands::Tui);

  let _guard = match &command {
    Commands::Tui => init_tui_logging(),
    _ => {
      init_cli_logging();
      None
    }
  };

  match command {
    Commands::Tui => cmd_tui().await,
    Commands::Reference { json } => cmd_reference(json),
    Commands::Datasets { json } => cmd_datasets(json),
  }
}

/// Launch the interactive TUI
async fn cmd_tui() -> Result<()> {
  let config = Config::load();
  tui::run(config).await.context("Failed to run TUI")
}

/// Print the NADBenchmarks citation
fn cmd_reference(json: bool) -> Result<()> {
  let content = AboutContent::builtin();

  if json {
    let out = serde_json::json!({ "reference": content.citation.as_str() });
    println!("{}", serde_json::to_string_pretty(&out)?);
  } else {
    println!("{}", content.citation);
  }

  Ok(())
}

/// List the built-in dataset catalog
fn cmd_datasets(json: bool) -> Result<()> {
  let catalog = builtin_catalog();

  if json {
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    return Ok(());
  }

  for (i, dataset) in catalog.iter().enumerate() {
    println!(
      "{}. {} [{}] ({})",
      i + 1,
      dataset.name,
      dataset.data_type.as_str(),
      dataset.phase.as_str()
    );
    println!("   Tasks:    {}", dataset.task_types.join(", "));
    println!("   Size:     {}", dataset.size);
    println!("   Coverage: {} ({})", dataset.geo_coverage, dataset.timespan);
    println!("   {}", dataset.reference);
    println!();
  }

  Ok(())
}
