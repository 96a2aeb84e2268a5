use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use decision_criteria::adapters::{LocalReportWriter, ReportRenderer};
use decision_criteria::application::{AnalysisSettings, RunAnalysisCommand, RunAnalysisHandler};
use decision_criteria::config::{AppConfig, LoggingConfig};
use decision_criteria::domain::criteria::EvaluationMode;
use decision_criteria::domain::matrix::PayoffMatrix;
use decision_criteria::ports::{ReportFormat, ReportWriter};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate every criterion of a mode against a payoff matrix
    Analyze(AnalyzeArg),
}

#[derive(Debug, Clone, clap::Args)]
struct AnalyzeArg {
    /// Payoff matrix JSON file ({"strategies": [..], "states": [..], "data": [[..]]})
    #[arg(long)]
    matrix: PathBuf,
    /// Decision setting: uncertainty or risk
    #[arg(long)]
    mode: EvaluationMode,
    /// Hurwitz coefficient of optimism (uncertainty)
    #[arg(long)]
    alpha: Option<f64>,
    /// Comma-separated state probabilities (risk)
    #[arg(long, value_delimiter = ',')]
    probabilities: Option<Vec<f64>>,
    /// Report format written to the output directory: json, yaml or markdown
    #[arg(long)]
    format: Option<ReportFormat>,
    /// Directory the report is written into
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Analyze(arg) => analyze(arg, &config).await,
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn analyze(arg: AnalyzeArg, config: &AppConfig) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(&arg.matrix)
        .await
        .with_context(|| format!("failed to read {}", arg.matrix.display()))?;
    let matrix: PayoffMatrix = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse payoff matrix {}", arg.matrix.display()))?;

    let handler = RunAnalysisHandler::new(AnalysisSettings::from(&config.analysis));
    let report = handler.handle(RunAnalysisCommand {
        matrix,
        mode: arg.mode,
        alpha: arg.alpha,
        probabilities: arg.probabilities,
    })?;

    let renderer = ReportRenderer::new();
    let summary = renderer.render(&report, ReportFormat::Markdown)?;
    println!("{}", summary.content);

    let format = match arg.format {
        Some(format) => format,
        None => config.export.format()?,
    };
    let exported = renderer.render(&report, format)?;
    let output_dir = arg
        .output_dir
        .unwrap_or_else(|| config.export.output_dir.clone());
    let path = LocalReportWriter::new(output_dir).write(&exported).await?;

    let rec = &report.statistics.most_frequent;
    info!(
        analysis_id = %report.analysis_id,
        strategy = ?rec.strategy,
        confidence = rec.confidence.label(),
        path = %path.display(),
        "Analysis complete"
    );
    Ok(())
}
