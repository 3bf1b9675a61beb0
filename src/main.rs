use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use log::error;
use string_evolver::ga::{GaConfig, GaRunner, GenerationPrinter};
use string_evolver::GaError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GaError> {
    let config = GaConfig::default();
    let stdout = io::stdout();
    let mut printer = GenerationPrinter::new(BufWriter::new(stdout.lock()));
    GaRunner::run_with_observer(&config, &mut printer)?;
    printer.into_inner().flush()?;
    Ok(())
}
