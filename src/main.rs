//! standup binary entry point.

use std::process::ExitCode;

use standup::ui::output;

fn main() -> ExitCode {
    match standup::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<clap::Error>() {
            // clap renders its own "error:" prefix and usage hint
            Some(parse_error) => {
                parse_error.print().ok();
                if parse_error.use_stderr() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            None => {
                output::error(format!("{:#}", err));
                ExitCode::FAILURE
            }
        },
    }
}
