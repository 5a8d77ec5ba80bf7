use std::process::ExitCode;

fn main() -> ExitCode {
    match restamp::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            restamp::ui::output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
