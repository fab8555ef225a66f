//! Binary entrypoint for the `confero-fetch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    if let Err(err) = confero_fetch::logging::init_logging() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match confero_fetch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
