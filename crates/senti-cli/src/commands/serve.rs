//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use senti_core::{InferenceClient, InferenceConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// URL of the sentiment inference service
    #[arg(long, env = "ML_API_URL")]
    pub ml_api_url: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = InferenceConfig::new(&args.ml_api_url);
    let inference = InferenceClient::new(config)?;

    println!();
    println!(
        "  {} {}",
        "Senti".cyan().bold(),
        "Sentiment Gateway".bold()
    );
    println!();
    println!(
        "  {}        http://{}:{}/api/sentiment",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}     http://{}:{}/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  {}",
        "Inference".green(),
        args.ml_api_url
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    senti_web::run_server(inference, &args.host, args.port).await?;

    Ok(())
}
