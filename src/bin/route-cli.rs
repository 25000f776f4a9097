use std::path::PathBuf;
use std::process::ExitCode;

use axum::http::Method;
use clap::{Parser, Subcommand};

use page_router::config::{load_config, AppConfig};
use page_router::routing::Router;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect and test the page route table", long_about = None)]
struct Cli {
    /// TOML config file; built-in routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match priority order
    Routes,
    /// Resolve a request against the table
    Match {
        /// HTTP method, e.g. GET
        method: String,
        /// Request path, e.g. /kitten/large
        path: String,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    let router = Router::from_config(&config.routes, &config.routing)?;

    match cli.command {
        Commands::Routes => {
            for (i, rule) in router.routes().iter().enumerate() {
                println!(
                    "{:>3}  {:<7} {:<28} {}",
                    i + 1,
                    rule.method.method().as_str(),
                    rule.pattern.to_string(),
                    rule.handler
                );
            }
        }
        Commands::Match { method, path } => {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())?;
            match router.match_route(&method, &path) {
                Ok(route) => println!("{}", serde_json::to_string_pretty(&route)?),
                Err(e) => {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
