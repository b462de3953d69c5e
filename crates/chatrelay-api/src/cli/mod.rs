//! CLI command definitions for the `chatrelay` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod history;

use clap::{Parser, Subcommand};

/// Relay chat messages to Gemini and keep a local history.
#[derive(Parser)]
#[command(name = "chatrelay", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log errors only, and print bare results without banners or styling.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Override the generation model from config.toml.
    #[arg(long, global = true, env = "CHATRELAY_MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Interface to bind (defaults to config.toml, then 127.0.0.1).
        #[arg(long, env = "CHATRELAY_HOST")]
        host: Option<String>,

        /// Port to listen on (defaults to config.toml, then 8000).
        #[arg(short, long, env = "CHATRELAY_PORT")]
        port: Option<u16>,
    },

    /// Send one message and record the exchange.
    Ask {
        /// The message to send.
        message: String,
    },

    /// Show every stored exchange, most recent first.
    #[command(alias = "log")]
    History,
}
