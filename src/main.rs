use std::process::ExitCode;

fn main() -> ExitCode {
    match modforge::cli::run_cli() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("❌ {err:#}");
            ExitCode::FAILURE
        }
    }
}
