mod config;
mod csv_table;
mod errors;
mod jobs;
mod models;
mod output;
mod pipeline;
mod questions;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pipeline::{run, RunParams};

#[derive(Parser, Debug)]
#[command(
    name = "prepdata",
    version,
    about = "Build the interview-prep JSON from a question bank CSV and a job descriptions CSV"
)]
struct Args {
    /// Question bank CSV (id, question, difficulty, <category column>)
    #[arg(long)]
    questions: PathBuf,

    /// Job descriptions CSV
    #[arg(long)]
    jobs: PathBuf,

    /// Where to write the combined JSON
    #[arg(long)]
    output: PathBuf,

    /// Column holding the question category [default: category, or PREPDATA_CATEGORY_COLUMN]
    #[arg(long)]
    category_column: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prepdata v{}", env!("CARGO_PKG_VERSION"));

    let params = RunParams {
        question_bank_path: args.questions,
        job_descriptions_path: args.jobs,
        output_path: args.output,
        category_column: args.category_column.unwrap_or(config.category_column),
    };

    run(&params)?;
    Ok(())
}
