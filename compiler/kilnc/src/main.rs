//! kiln command-line driver.

use std::io;
use std::process::ExitCode;

use kilnc::{init_tracing, run_expressions, run_lines, Options, MAX_DEPTH_VAR, USAGE};

fn main() -> ExitCode {
    init_tracing();

    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    let options = options.with_max_depth_var(std::env::var(MAX_DEPTH_VAR).ok().as_deref());

    let mut interp = options.interpreter();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let result = if options.expressions.is_empty() {
        run_lines(&mut interp, io::stdin().lock(), &mut out, &mut err)
    } else {
        run_expressions(&mut interp, &options.expressions, &mut out, &mut err)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
