use checkout_gate::application::engine::CheckoutEngine;
use checkout_gate::domain::form::PaymentMethod;
use checkout_gate::infrastructure::observers::TracingObserver;
use checkout_gate::interfaces::csv::event_reader::EventReader;
use checkout_gate::interfaces::csv::outcome_writer::{OutcomeRecord, OutcomeWriter, write_json};
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Event script CSV file (`event,target,value`)
    input: PathBuf,

    /// Output format for the submission outcomes
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Payment method selected when the form loads
    #[arg(long, value_enum, default_value = "credit")]
    payment: PaymentMethod,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let mut engine = CheckoutEngine::new(cli.payment);
    engine.subscribe(Box::new(TracingObserver));

    // Replay the script
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    let mut outcomes = Vec::new();
    for event_result in reader.events() {
        match event_result {
            Ok(event) => {
                if let Some(outcome) = engine.handle(event) {
                    outcomes.push(OutcomeRecord::new(engine.attempts(), outcome));
                }
            }
            Err(e) => {
                tracing::error!("Error reading event: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => OutcomeWriter::new(stdout.lock())
            .write_outcomes(&outcomes)
            .into_diagnostic()?,
        OutputFormat::Json => write_json(stdout.lock(), &outcomes).into_diagnostic()?,
    }

    Ok(())
}
