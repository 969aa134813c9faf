//! `citygen` binary entrypoint.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use citygen_config::load_vocabulary;
use citygen_orchestrator::CityGenerator;
use citygen_providers::{CompletionClient, OpenAIClient};
use citygen_server::commands::{Cli, Commands};
use citygen_server::types::EMPTY_PROMPT_MESSAGE;
use citygen_server::{serve, ServerConfig};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    // `.env.local` wins over `.env`; neither is required.
    dotenv::from_filename(".env.local").ok();
    dotenv::dotenv().ok();

    // Respect `RUST_LOG` if set; otherwise default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(path) = &cli.vocabulary {
        config.vocabulary_path = Some(path.clone());
    }

    let vocabulary = load_vocabulary(config.vocabulary_path.as_deref())?;
    info!(
        terrain = vocabulary.terrain.len(),
        lighting = vocabulary.lighting.len(),
        npc_behavior = vocabulary.npc_behavior.len(),
        buildings = vocabulary.buildings.len(),
        "vocabulary loaded"
    );

    let client: Arc<dyn CompletionClient> = Arc::new(
        OpenAIClient::new(config.provider.clone()).context("failed to build completion client")?,
    );
    let generator = CityGenerator::new(client, Arc::new(vocabulary));

    match cli.command() {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config, generator).await
        }
        Commands::Generate { prompt, pretty } => {
            let prompt = prompt.trim();
            if prompt.is_empty() {
                bail!(EMPTY_PROMPT_MESSAGE);
            }

            let outcome = generator.generate(prompt).await?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&outcome)?
            } else {
                serde_json::to_string(&outcome)?
            };
            println!("{}", rendered);
            Ok(())
        }
    }
}
