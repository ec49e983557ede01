//! Realm server entry point.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use realm::api::{create_rest_router, RestApiConfig};
use realm::config::Config;
use realm::market::{DataOrigin, MarketTable};
use realm::query::QueryEngine;

/// Realm: Real-Estate Market Analytics Server
#[derive(Parser, Debug)]
#[command(name = "realm")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a single query against the local dataset
    Query {
        /// Query text, e.g. "Analyze Wakad"
        query: String,
    },
    /// List known areas
    Areas,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let table = Arc::new(MarketTable::load(config.data_file()));
    if table.origin() == DataOrigin::Synthetic {
        tracing::info!(records = table.len(), "Running on synthetic sample data");
    }
    let engine = Arc::new(QueryEngine::new(table));

    let command = args.command.unwrap_or(Command::Serve { port: None });
    match command {
        Command::Serve { port } => {
            let port = port.unwrap_or(config.server.http_port);
            let router = create_rest_router(engine, &RestApiConfig::default());
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            tracing::info!(port, "Realm API listening");
            axum::serve(listener, router).await?;
        }
        Command::Query { query } => {
            let response = engine.execute(&query)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", response.summary);
            }
        }
        Command::Areas => {
            let areas = engine.list_areas();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&areas)?);
            } else {
                for area in areas {
                    println!("{}", area);
                }
            }
        }
    }

    Ok(())
}
