// Prints the dynamic type of a Derived value held through a Base handle.

use std::io;
use std::process::ExitCode;

use typeid_demo::{logging, report};

fn main() -> ExitCode {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match report::run(&mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
