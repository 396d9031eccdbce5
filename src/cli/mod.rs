//! CLI module for the recipes API

pub mod serve;

use clap::{Parser, Subcommand};

/// Recipes API - recipe CRUD over a document store with a cached listing
#[derive(Parser)]
#[command(name = "recipes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
