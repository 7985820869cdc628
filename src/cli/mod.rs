//! CLI module for the weather webhook service
//!
//! Provides subcommands for running the service in different modes:
//! - `serve`: HTTP API server (default)
//! - `fetch`: one-shot forecast lookup printed to stdout

pub mod fetch;
pub mod serve;

use clap::{Parser, Subcommand};

/// Weather webhook - cached city forecast summaries over HTTP
#[derive(Parser)]
#[command(name = "weather-webhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default mode)
    Serve,

    /// Fetch a forecast once and print it as JSON
    Fetch(fetch::FetchArgs),
}
