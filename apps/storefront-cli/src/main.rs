//! # Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        storefront (binary)                              │
//! │                                                                         │
//! │  main.rs ────► parse flags, init logging                               │
//! │                                                                         │
//! │  lib.rs ─────► load config, build source, initial fetch, shell loop    │
//! │                                                                         │
//! │  stdout ◄──── product grid, cart, wishlist, notifications              │
//! │  stderr ◄──── tracing logs                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;
use storefront_cli_lib::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = ?e.code, "{}", e.message);
            eprintln!("⚠️ {}", e);
            ExitCode::FAILURE
        }
    }
}
