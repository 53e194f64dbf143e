use checkout_validator::application::validator::InstrumentValidator;
use checkout_validator::domain::expiry::YearMonth;
use checkout_validator::domain::ports::ClockBox;
use checkout_validator::domain::request::PaymentRequest;
use checkout_validator::infrastructure::clock::{FixedClock, SystemClock};
use checkout_validator::interfaces::csv::request_reader::CsvRequestReader;
use checkout_validator::interfaces::csv::result_writer::CsvResultWriter;
use checkout_validator::interfaces::jsonl::{JsonlRequestReader, JsonlResultWriter};
use checkout_validator::interfaces::{ResultSink, RowResult};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// method,vpa,card_number,expiry_month,expiry_year
    Csv,
    /// One JSON request body per line
    Jsonl,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of payment requests
    input: PathBuf,

    /// Format of both the input and the results written to stdout
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Treat this month (YYYY-MM) as "today" for expiry checks instead of the wall clock
    #[arg(long, env = "CHECKOUT_AS_OF")]
    as_of: Option<YearMonth>,
}

type Requests = Box<dyn Iterator<Item = checkout_validator::error::Result<PaymentRequest>>>;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();

    let cli = Cli::parse();

    let clock: ClockBox = match cli.as_of {
        Some(today) => {
            info!(%today, "using fixed clock");
            Box::new(FixedClock::new(today))
        }
        None => Box::new(SystemClock::new()),
    };
    let validator = InstrumentValidator::new(clock);

    let file = File::open(&cli.input).into_diagnostic()?;
    let stdout = io::stdout().lock();
    let (requests, mut sink): (Requests, Box<dyn ResultSink>) = match cli.format {
        Format::Csv => (
            Box::new(CsvRequestReader::new(file).requests()),
            Box::new(CsvResultWriter::new(stdout)),
        ),
        Format::Jsonl => (
            Box::new(JsonlRequestReader::new(file).requests()),
            Box::new(JsonlResultWriter::new(stdout)),
        ),
    };

    let (mut accepted, mut rejected) = (0u64, 0u64);
    for (index, request) in requests.enumerate() {
        let row = index as u64 + 1;
        match request {
            Ok(request) => {
                let result = validator.validate(&request);
                if result.valid {
                    accepted += 1;
                } else {
                    rejected += 1;
                }
                sink.write_result(&RowResult::new(row, &request, result))
                    .into_diagnostic()?;
            }
            Err(e) => {
                warn!(row, "Error reading payment request: {}", e);
            }
        }
    }
    sink.flush().into_diagnostic()?;

    info!(accepted, rejected, "validation finished");
    Ok(())
}
