use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    match training_index::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) if err.precedes_logging() => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
