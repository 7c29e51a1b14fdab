use rx_latest::{cli, errors, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_logging();

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| errors::AppError::Runtime(e.to_string()))
        .and_then(|rt| rt.block_on(cli::cli()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Lookup failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
