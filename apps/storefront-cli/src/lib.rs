//! # Storefront CLI Library
//!
//! Core library for the storefront terminal shop. The binary in `main.rs`
//! only parses flags and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! storefront_cli_lib/
//! ├── lib.rs          ◄─── You are here (startup & shell loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── store.rs    ◄─── Storefront store (update-and-notify)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing and dispatch
//! │   └── render.rs   ◄─── View-models to plain text
//! └── error.rs        ◄─── CliError for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use storefront_catalog::{CatalogSource, ProductSource, SourceKind, StorefrontConfig};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{execute, render, Command, Reply};
use error::CliError;
use state::Storefront;

const PROMPT: &[u8] = b"> ";

/// Command-line flags for the `storefront` binary.
#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse products, fill a cart and keep a wishlist", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Product source, overriding the config file
    #[arg(long)]
    pub source: Option<SourceKind>,

    /// Product API URL, overriding the config file
    #[arg(long)]
    pub api_url: Option<String>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults ◄── storefront.toml ◄── STOREFRONT_* ◄── flags           │
/// │                                                                         │
/// │  2. Build Product Source ─────────────────────────────────────────────► │
/// │     • http: reqwest client with request timeout                         │
/// │     • fixture: embedded JSON or fixture_path                            │
/// │                                                                         │
/// │  3. Initial Fetch ────────────────────────────────────────────────────► │
/// │     • failure is shown inline; the shell still starts                   │
/// │                                                                         │
/// │  4. Shell Loop ───────────────────────────────────────────────────────► │
/// │     • one command per stdin line until `quit` or EOF                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting storefront");

    let config = load_config(&cli)?;

    if cli.init_config {
        let path = cli
            .config
            .clone()
            .or_else(StorefrontConfig::default_config_path);
        config.save(path.clone())?;
        if let Some(path) = path {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(format!("Wrote {}\n", path.display()).as_bytes())
                .await?;
            stdout.flush().await?;
        }
        return Ok(());
    }

    let source = CatalogSource::from_settings(&config.source)?;
    info!(source = %source.describe(), "Product source ready");

    let mut store = Storefront::new(
        source,
        Duration::from_millis(config.display.notification_ttl_ms),
    );

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("Storefront ({})\n", store.source().describe()).as_bytes())
        .await?;

    match store.load_products().await {
        Ok(count) => {
            stdout
                .write_all(format!("{} products. Type 'help' for commands.\n", count).as_bytes())
                .await?
        }
        Err(e) => {
            stdout
                .write_all(format!("{}\n", render::load_error(&e.message)).as_bytes())
                .await?
        }
    }

    let stdin = BufReader::new(tokio::io::stdin());
    shell(&mut store, &config.display.currency_symbol, stdin, stdout).await?;

    info!("Storefront closed");
    Ok(())
}

/// Loads the config file and environment, then applies flag overrides.
pub fn load_config(cli: &Cli) -> Result<StorefrontConfig, CliError> {
    let mut config = StorefrontConfig::load(cli.config.clone())?;

    if let Some(kind) = cli.source {
        config.source.kind = kind;
    }
    if let Some(url) = &cli.api_url {
        config.source.api_url = url.clone();
    }
    config.validate()?;

    Ok(config)
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Each command's output is followed by any notifications it raised.
pub async fn shell<S, R, W>(
    store: &mut Storefront<S>,
    symbol: &str,
    input: R,
    mut output: W,
) -> Result<(), CliError>
where
    S: ProductSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut last_notification = 0;

    output.write_all(PROMPT).await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let text = match Command::parse(&line) {
            Ok(None) => String::new(),
            Ok(Some(command)) => match execute(store, command, symbol).await {
                Ok(Reply::Quit) => break,
                Ok(Reply::Text(text)) => text,
                Err(e) => render::load_error(&e.message),
            },
            Err(e) => render::load_error(&e.message),
        };

        if !text.is_empty() {
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }

        let mut fresh = Vec::new();
        for n in store.notifications() {
            if n.id > last_notification {
                fresh.push(render::notification(n));
                last_notification = n.id;
            }
        }
        for line in fresh {
            output.write_all(line.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }

        output.write_all(PROMPT).await?;
        output.flush().await?;
    }

    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - Default: `warn,storefront=info`
/// - `-v`: `info,storefront=debug`
/// - `-vv`: `debug,storefront=trace`
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn,storefront=info",
            1 => "info,storefront=debug",
            _ => "debug,storefront=trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::FixtureProductSource;

    async fn run_shell(script: &str) -> String {
        let mut store = Storefront::new(FixtureProductSource::Embedded, Duration::from_secs(3));
        store.load_products().await.unwrap();

        let mut output = Vec::new();
        shell(&mut store, "R", script.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_shell_session() {
        let output = run_shell("add 1\nadd 1\ncart\nquit\nclear\n").await;

        assert_eq!(output.matches("🛒 Added to cart").count(), 2);
        assert!(output.contains("Cart (2 items)"));
        assert!(output.contains("Total: R19.98"));
        assert!(!output.contains("Cart cleared"));
    }

    #[tokio::test]
    async fn test_shell_prints_each_notification_once() {
        let output = run_shell("add 1\ncart\nwl\nadd 2\n").await;

        assert_eq!(output.matches("🛒 Added to cart").count(), 2);
    }

    #[tokio::test]
    async fn test_shell_remove_absent_line() {
        let output = run_shell("remove 99\ncart\n").await;

        assert!(output.contains("Product 99 is not in your cart"));
        assert!(!output.contains("Removed from cart"));
        assert!(output.contains("Your cart is empty"));
    }

    #[tokio::test]
    async fn test_shell_reports_errors_inline() {
        let output = run_shell("add 404\nfrobnicate\n\nwish 2\n").await;

        assert!(output.contains("⚠️ Product not found: 404"));
        assert!(output.contains("⚠️ Unknown command 'frobnicate'"));
        assert!(output.contains("💖 Added to wishlist"));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["storefront", "--source", "http", "-vv", "--init-config"]);
        assert_eq!(cli.source, Some(SourceKind::Http));
        assert_eq!(cli.verbose, 2);
        assert!(cli.init_config);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flag_overrides() {
        let dir = std::env::temp_dir().join(format!("storefront-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storefront.toml");
        std::fs::write(&path, "[source]\nkind = \"fixture\"\n").unwrap();

        let cli = Cli::parse_from([
            "storefront",
            "--config",
            path.to_str().unwrap(),
            "--source",
            "http",
            "--api-url",
            "http://127.0.0.1:9/products",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.source.kind, SourceKind::Http);
        assert_eq!(config.source.api_url, "http://127.0.0.1:9/products");

        let cli = Cli::parse_from([
            "storefront",
            "--config",
            path.to_str().unwrap(),
            "--source",
            "http",
            "--api-url",
            "ftp://example.com",
        ]);
        assert!(load_config(&cli).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
