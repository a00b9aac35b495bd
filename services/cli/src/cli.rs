use crate::infra::{parse_date, read_record};
use crate::output::{write_json, ReportEnvelope};
use brsr_core::config::AppConfig;
use brsr_core::error::AppError;
use brsr_core::scoring::{write_csv, ScoringConfig};
use brsr_core::{telemetry, ReportPipeline};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "brsr",
    about = "Score sustainability disclosure records and compile report documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute derived headcount and environmental metrics
    Metrics(InputArgs),
    /// Score a record against the compliance rubric
    Score(ScoreArgs),
    /// Compile the report document sections
    Document(InputArgs),
    /// Run the full pipeline and emit metrics, score and document together
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Disclosure record JSON file, or `-` for stdin
    #[arg(long, short, default_value = "-")]
    input: PathBuf,
    /// Indent JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output format for the score
    #[arg(long, value_enum, default_value_t = ScoreFormat::Json)]
    format: ScoreFormat,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Date stamped on the report (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    as_of: Option<NaiveDate>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScoreFormat {
    Json,
    Csv,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let pipeline = ReportPipeline::new(config.report.metrics_config(), ScoringConfig::default());

    match cli.command {
        Command::Metrics(args) => {
            let record = read_record(&args.input)?;
            write_json(&pipeline.metrics(&record), args.pretty)
        }
        Command::Score(ScoreArgs { input, format }) => {
            let record = read_record(&input.input)?;
            let score = pipeline.score(&record);
            match format {
                ScoreFormat::Json => write_json(&score, input.pretty),
                ScoreFormat::Csv => Ok(write_csv(&score, io::stdout().lock())?),
            }
        }
        Command::Document(args) => {
            let record = read_record(&args.input)?;
            write_json(&pipeline.run(&record).document, args.pretty)
        }
        Command::Report(ReportArgs { input, as_of }) => {
            let record = read_record(&input.input)?;
            let envelope = ReportEnvelope {
                generated_on: as_of.unwrap_or_else(|| Local::now().date_naive()),
                artifacts: pipeline.run(&record),
            };
            write_json(&envelope, input.pretty)
        }
    }
}
