// ABOUTME: Main server binary for the Forma Coach gateway
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Forma Coach Server Binary
//!
//! Starts the coaching gateway: AI chat, plan generation, image generation,
//! text-to-speech pass-throughs plus session persistence and progress
//! insights, all configured from the environment.

use anyhow::Result;
use clap::Parser;
use forma_coach_server::{
    config::environment::ServerConfig, logging, resources::ServerResources, server::CoachServer,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "forma-coach-server")]
#[command(about = "Forma Coach - AI-backed fitness planning API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Forma Coach gateway");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    let server = CoachServer::new(resources);

    server.run().await?;
    Ok(())
}
