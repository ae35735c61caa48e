//! Instagram Extractor - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use instagram_extractor::{
    cli::Args, error::Result, ExtractRequest, ExtractionFailure, Extractor, InstagramApi,
    PostExtraction,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Stdout carries only the JSON document; all logging goes to stderr.
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let request = args.into_request();

    match run(&request).await {
        Ok(result) => {
            print_json(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_json(&ExtractionFailure::from(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(request: &ExtractRequest) -> Result<PostExtraction> {
    let api = InstagramApi::new()?;
    let extractor = Extractor::new(api);
    extractor.extract(request).await
}

fn print_json<T: serde::Serialize>(payload: &T) {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize result: {}", e),
    }
}
