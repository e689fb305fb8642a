//! CLI entry point for dataset generation and CSV analysis.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use datasynth::analysis::{AnalysisPipeline, load_csv};
use datasynth::config::AppConfig;
use datasynth::query::PlotSelector;
use dotenv::dotenv;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

#[cfg(feature = "ai")]
use datasynth::ai::{ModelProvider, OpenAiConfig, OpenAiProvider};
#[cfg(feature = "ai")]
use datasynth::export::{self, GenerationReport};
#[cfg(feature = "ai")]
use datasynth::generator::{GenerationRequest, Generator};
#[cfg(feature = "ai")]
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "AI-powered dataset generator and CSV analysis tool",
    long_about = "Generate structured datasets from a free-text description, or analyze\n\
                  an existing CSV (categorical encoding + summary statistics).\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  OPENAI_API_KEY    API key for the model call (required)\n\n\
                  EXAMPLES:\n  \
                  # Generate a 10-row dataset\n  \
                  datasynth generate -r 10 -c 3 \"Sales data with Date, Product, and Price\"\n\n  \
                  # Analyze a CSV and pick scatter axes from a query\n  \
                  datasynth analyze -i data.csv --query \"show price vs target\""
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a dataset from a free-text description
    Generate {
        /// Free-text description of the dataset context
        context: String,

        /// Number of data rows
        #[arg(short, long, default_value = "5")]
        rows: usize,

        /// Number of feature columns (excluding S.No & Target)
        #[arg(short, long, default_value = "3")]
        columns: usize,

        /// Model to use for generation
        #[arg(short, long, default_value = "gpt-4")]
        model: String,

        /// Output directory for the exported CSV
        #[arg(short, long, default_value = "./outputs")]
        output: PathBuf,

        /// Write a JSON generation report next to the CSV
        #[arg(long)]
        emit_report: bool,
    },

    /// Analyze an existing CSV file
    Analyze {
        /// Path to the CSV file to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Free-text query for scatter plot axis selection
        #[arg(long)]
        query: Option<String>,

        /// Distinct-value threshold for one-hot encoding
        #[arg(long, default_value = "5")]
        cardinality_threshold: usize,

        /// Write the encoded table to this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    // Load environment variables from .env file
    dotenv().ok();

    // The API credential gates the whole process, matching the single
    // configuration surface: present, or fatal before any work happens.
    #[cfg(feature = "ai")]
    datasynth::config::api_key_from_env().map_err(|e| anyhow!("{}", e))?;

    match args.command {
        Command::Generate {
            context,
            rows,
            columns,
            model,
            output,
            emit_report,
        } => run_generate(&context, rows, columns, &model, &output, emit_report),
        Command::Analyze {
            input,
            query,
            cardinality_threshold,
            output,
        } => run_analyze(&input, query.as_deref(), cardinality_threshold, output),
    }
}

/// Run the generation flow: prompt -> model -> parse -> normalize -> export.
#[cfg(feature = "ai")]
fn run_generate(
    context: &str,
    rows: usize,
    columns: usize,
    model: &str,
    output: &std::path::Path,
    emit_report: bool,
) -> Result<()> {
    let api_key = datasynth::config::api_key_from_env().map_err(|e| anyhow!("{}", e))?;
    let request = GenerationRequest::new(rows, columns, context).map_err(|e| anyhow!("{}", e))?;

    let config = OpenAiConfig::builder().model(model).build();
    let provider = Arc::new(OpenAiProvider::with_config(api_key, config)?);
    let model_name = provider.model().map(str::to_string);

    info!("Generating dataset ({} rows x {} feature columns)...", rows, columns);

    let dataset = Generator::new(provider)
        .generate(&request)
        .map_err(|e| anyhow!("{}", e))?;

    println!("\n{}", dataset.title);
    println!("{}", "=".repeat(dataset.title.len().max(20)));
    println!("{}\n", dataset.summary);

    let preview = dataset.to_dataframe().map_err(|e| anyhow!("{}", e))?;
    println!("{}\n", preview);

    let path = export::export_csv(&dataset, output).map_err(|e| anyhow!("{}", e))?;
    println!("Saved: {}", path.display());

    if emit_report {
        let report = GenerationReport::new(&dataset, model_name.as_deref());
        let report_path = report.write_to(output).map_err(|e| anyhow!("{}", e))?;
        println!("Report: {}", report_path.display());
    }

    Ok(())
}

#[cfg(not(feature = "ai"))]
fn run_generate(
    _context: &str,
    _rows: usize,
    _columns: usize,
    _model: &str,
    _output: &std::path::Path,
    _emit_report: bool,
) -> Result<()> {
    Err(anyhow!(
        "AI support not compiled in. Rebuild with --features ai to enable dataset generation."
    ))
}

/// Run the analysis flow: load -> encode -> summarize -> (optional) plot axes.
fn run_analyze(
    input: &std::path::Path,
    query: Option<&str>,
    cardinality_threshold: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    if !input.exists() {
        return Err(anyhow!("Input file not found: {}", input.display()));
    }

    let config = AppConfig::builder()
        .cardinality_threshold(cardinality_threshold)
        .build()
        .map_err(|e| anyhow!("{}", e))?;

    info!("Loading dataset from: {}", input.display());
    let df = load_csv(input).map_err(|e| anyhow!("{}", e))?;
    info!("Dataset loaded successfully: {:?}", df.shape());

    let result = AnalysisPipeline::new(&config)
        .analyze(df)
        .map_err(|e| anyhow!("{}", e))?;

    for action in &result.actions {
        println!("- {}", action);
    }
    if !result.actions.is_empty() {
        println!();
    }

    println!("SUMMARY STATISTICS");
    println!("{}", "-".repeat(90));
    println!(
        "{:<20} {:>8} {:>10} {:>10} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"
    );
    for s in &result.summaries {
        println!(
            "{:<20} {:>8} {:>10.3} {:>10.3} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            s.name, s.count, s.mean, s.std, s.min, s.q1, s.median, s.q3, s.max
        );
    }
    println!();

    if let Some(query) = query {
        let column_names: Vec<String> = result
            .data
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();

        match PlotSelector::select(query, &column_names) {
            Some(spec) => {
                println!("Scatter plot axes: X = {}, Y = {}", spec.x, spec.y);
                let plot_data = result
                    .data
                    .select([spec.x.as_str(), spec.y.as_str()])
                    .map_err(|e| anyhow!("{}", e))?;
                println!("{}", plot_data);
            }
            None => {
                warn!("Could not determine relevant columns for the query. Try different keywords.");
            }
        }
    }

    if let Some(dir) = output {
        std::fs::create_dir_all(&dir)?;
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let path = dir.join(format!("{}_encoded.csv", stem));
        let mut encoded = result.data.clone();
        let mut file = std::fs::File::create(&path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut encoded)?;
        println!("Encoded table saved: {}", path.display());
    }

    Ok(())
}
