use std::process::ExitCode;

fn main() -> ExitCode {
    match bevy_flares::game::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging is not installed until the app starts.
            eprintln!("flares: {e}");
            ExitCode::FAILURE
        }
    }
}
