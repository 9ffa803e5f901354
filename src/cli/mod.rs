//! Command-line interface

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "exchange-gateway", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
