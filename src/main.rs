//! docfields - entry point
//!
//! Command-line front end for the OCR field extraction pipeline.

use clap::Parser;
use docfields::{PageErrorPolicy, Pipeline, PipelineConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract entities and key-value fields from a scanned PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the PDF document.
    document: PathBuf,

    /// OCR language hint applied to every page.
    #[arg(long, default_value = "eng+hin")]
    lang: String,

    /// Upper bound, in seconds, on a single page's recognition time.
    #[arg(long)]
    ocr_timeout_secs: Option<u64>,

    /// Mark failing pages in the result instead of aborting the run.
    #[arg(long)]
    skip_failed_pages: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docfields=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = PipelineConfig {
        languages: args.lang,
        ocr_timeout: args.ocr_timeout_secs.map(Duration::from_secs),
        page_error_policy: if args.skip_failed_pages {
            PageErrorPolicy::SkipFailedPages
        } else {
            PageErrorPolicy::FailFast
        },
    };

    let pipeline = Pipeline::with_default_tools(config);
    let result = pipeline.run(&args.document).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
