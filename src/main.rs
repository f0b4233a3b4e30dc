// aiseo - SEO assistant: content scoring, AI-assisted analysis and markup generation
// Author: kelexine (https://github.com/kelexine)

use aiseo::ai::ProviderOptions;
use aiseo::analyzer::{score_breakdown, ContentAnalyzer};
use aiseo::cli::{Args, Command};
use aiseo::config::AppConfig;
use aiseo::server::create_router;
use aiseo::utils::logging;
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load_from(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;

    match args.command.unwrap_or(Command::Serve { host: None, port: None }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Analyze {
            path,
            provider,
            model,
            prompt,
            endpoint,
            explain,
        } => {
            let options = ProviderOptions {
                prompt,
                api_key: None,
                model,
                endpoint,
            };
            analyze(&config, path, provider.as_deref(), &options, explain).await
        }
        Command::Config => {
            print!("{}", toml::to_string_pretty(&config.redacted())?);
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    info!("Starting aiseo v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build analyzer (HTTP client + cache)
    let analyzer = ContentAnalyzer::from_config(&config)?;

    // Phase 4: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, analyzer)?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn analyze(
    config: &AppConfig,
    path: Option<PathBuf>,
    provider: Option<&str>,
    options: &ProviderOptions,
    explain: bool,
) -> Result<()> {
    let content = read_input(path.as_deref())?;
    let analyzer = ContentAnalyzer::from_config(config)?;
    let result = analyzer.analyze(&content, provider, options).await;

    let output = if explain {
        json!({
            "result": result,
            "signals": score_breakdown(&content, result.word_count),
        })
    } else {
        serde_json::to_value(&result)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
