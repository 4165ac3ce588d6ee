use std::process::ExitCode;

fn main() -> ExitCode {
    match braille_trends::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
