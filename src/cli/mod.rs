// CLI module for aiseo
// Author: kelexine (https://github.com/kelexine)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aiseo - SEO assistant: content scoring, AI-assisted analysis and markup generation
#[derive(Parser, Debug)]
#[command(name = "aiseo", version, about, long_about = None)]
pub struct Args {
    /// Configuration file (default: ~/.aiseo/config.toml if present)
    #[arg(long, global = true, env = "AISEO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve {
        /// Override server.host
        #[arg(long)]
        host: Option<String>,
        /// Override server.port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Analyze a file (or stdin) and print the result as JSON
    Analyze {
        /// File to read; `-` or nothing reads stdin
        path: Option<PathBuf>,
        /// AI provider to consult (openai, deepseek, or any name with --endpoint)
        #[arg(long)]
        provider: Option<String>,
        /// Model identifier sent to the provider
        #[arg(long)]
        model: Option<String>,
        /// System prompt sent to the provider
        #[arg(long)]
        prompt: Option<String>,
        /// Provider endpoint override
        #[arg(long)]
        endpoint: Option<String>,
        /// Also print which scoring rules fired
        #[arg(long)]
        explain: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}
