//! Form-extraction CLI.
//!
//! Reads a saved analysis-engine result (JSON) and runs the extraction
//! pipeline over it, printing the extracted record and validation summary
//! or writing the full result to a file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;

use extraction_engine::{AzureOpenAiClient, FieldExtractor, OpenAiConfig};
use form_pipeline::FormProcessor;
use shared_types::ProcessingResult;

const USAGE: &str = "usage: form-cli <analysis-result.json> [--output out.json] [--verbose]";

struct Args {
    input: PathBuf,
    output: Option<PathBuf>,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut output = None;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => {
                output = Some(PathBuf::from(
                    args.next().context("--output requires a path")?,
                ));
            }
            "--verbose" | "-v" => verbose = true,
            other if input.is_none() && !other.starts_with('-') => {
                input = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument: {other}\n{USAGE}"),
        }
    }

    Ok(Args {
        input: input.context(USAGE)?,
        output,
        verbose,
    })
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = parse_args()?;

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let raw_text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let raw: serde_json::Value = serde_json::from_str(&raw_text)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;

    let config = OpenAiConfig::from_env()?;
    let extractor = FieldExtractor::new(Box::new(AzureOpenAiClient::new(config)));
    let mut processor = FormProcessor::new(extractor);

    let source = args.input.display().to_string();
    let result = processor.process(&raw, &source);

    match args.output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("result saved to {}", path.display());
        }
        None => print_result(&result)?,
    }

    Ok(())
}

fn print_result(result: &ProcessingResult) -> Result<()> {
    println!("=== EXTRACTED DATA ===");
    println!("{}", serde_json::to_string_pretty(&result.data)?);

    if let Some(validation) = &result.validation {
        println!("\n=== VALIDATION SUMMARY ===");
        println!("Completeness: {:.1}%", validation.completeness_score);
        println!("OCR Confidence: {:.1}%", validation.accuracy_score);

        if !validation.warnings.is_empty() {
            println!(
                "\n=== VALIDATION WARNINGS ({} total) ===",
                validation.warnings.len()
            );
            for warning in &validation.warnings {
                println!("  • {warning}");
            }
        }
    }

    if let Some(error) = &result.error {
        println!("\nProcessing failed: {error}");
    }

    Ok(())
}
