//! CLI module for Gestor
//!
//! A single `serve` subcommand runs the web application; invoking the
//! binary with no subcommand does the same.

pub mod serve;

use clap::{Parser, Subcommand};

/// Gestor - inventory and sales management web application
#[derive(Parser)]
#[command(name = "gestor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server (default)
    Serve,
}
