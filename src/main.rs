use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use iau_wkt::{
    body_record::{detect_report_version, read_iau_report},
    iau_report::{IauReport, DEFAULT_DOI},
    processor::WktProcessor,
    projection::catalog::catalog_table,
    wkt_errors::WktError,
    wkt_writer::save_wkt,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "UPPER")]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

/// Convert the IAU report of body radii to WKT coordinate reference systems.
#[derive(Debug, Parser)]
#[command(name = "iau_wkt", version, about)]
struct Cli {
    /// CSV file of the IAU report
    #[arg(long, required_unless_present = "list_projections")]
    iau_report: Option<Utf8PathBuf>,

    /// Year of the IAU report, read from the CSV header when omitted
    #[arg(long)]
    iau_version: Option<String>,

    /// DOI of the IAU report, cited in every frame
    #[arg(long, default_value = DEFAULT_DOI)]
    iau_doi: String,

    /// Directory where iau.wkt is written
    #[arg(long, default_value = ".")]
    output_directory: Utf8PathBuf,

    #[arg(long, value_enum, ignore_case = true, default_value = "INFO")]
    level: LogLevel,

    /// Print the projections derived for every frame and exit
    #[arg(long)]
    list_projections: bool,
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.directive().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(cli: Cli) -> Result<(), WktError> {
    if cli.list_projections {
        println!("{}", catalog_table());
        return Ok(());
    }

    let Some(report_path) = cli.iau_report else {
        return Ok(());
    };
    let version = match cli.iau_version {
        Some(version) => version,
        None => detect_report_version(&report_path)?,
    };
    info!("IAU report {report_path}, version {version}");

    let records = read_iau_report(&report_path, &version)?;
    let crs_set = WktProcessor::new(IauReport::new(version, cli.iau_doi)).process(&records)?;

    std::fs::create_dir_all(&cli.output_directory)?;
    save_wkt(&crs_set, &cli.output_directory)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
