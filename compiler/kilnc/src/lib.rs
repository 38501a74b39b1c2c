//! The `kiln` driver: command-line options and the evaluation loop.
//!
//! ```text
//! kiln -e '+/!10'            # evaluate and print 45
//! kiln -d .app -e 'x:1'      # start in branch .app
//! echo '1+1' | kiln          # one expression per stdin line
//! ```
//!
//! Results other than `_n` are printed in their literal form. An error
//! prints `error: <message>` to stderr and makes the exit status 1.

use std::io::{self, BufRead, Write};
use std::sync::Once;

use kiln_eval::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
use kiln_value::Value;

/// Environment variable overriding the call-depth limit.
pub const MAX_DEPTH_VAR: &str = "KILN_MAX_DEPTH";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=kiln_eval=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Parsed command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// `-e` expressions, in order. Empty means read stdin.
    pub expressions: Vec<String>,
    /// `-d`/`--branch`: initial K-tree branch.
    pub branch: Option<String>,
    /// Call-depth limit, from `KILN_MAX_DEPTH`.
    pub max_call_depth: Option<usize>,
    /// `-h`/`--help`.
    pub help: bool,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Options, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-e" => {
                    let expr = args.next().ok_or("-e needs an expression")?;
                    options.expressions.push(expr);
                }
                "-d" | "--branch" => {
                    let branch = args.next().ok_or_else(|| format!("{arg} needs a branch"))?;
                    options.branch = Some(branch);
                }
                "-h" | "--help" => options.help = true,
                _ => {
                    if let Some(branch) = arg.strip_prefix("--branch=") {
                        options.branch = Some(branch.to_string());
                    } else {
                        return Err(format!("unknown argument `{arg}`"));
                    }
                }
            }
        }
        Ok(options)
    }

    /// Read settings that come from the environment.
    #[must_use]
    pub fn with_max_depth_var(mut self, value: Option<&str>) -> Self {
        self.max_call_depth = value.and_then(|v| v.trim().parse().ok());
        self
    }

    /// Interpreter configured from these options.
    pub fn interpreter(&self) -> Interpreter {
        let mut builder = InterpreterBuilder::new()
            .max_call_depth(self.max_call_depth.unwrap_or(DEFAULT_MAX_CALL_DEPTH));
        if let Some(branch) = &self.branch {
            builder = builder.initial_branch(branch.as_str());
        }
        builder.build()
    }
}

/// Usage text for `-h`.
pub const USAGE: &str = "\
Usage: kiln [-e <expr>]... [-d <branch>]

Options:
  -e <expr>              Evaluate an expression (repeatable)
  -d, --branch <branch>  Initial K-tree branch (default .k)
  -h, --help             Show this help

Without -e, each line of stdin is evaluated in turn.
The KILN_MAX_DEPTH environment variable sets the call-depth limit.";

/// Evaluate one source text, printing a non-null result to `out` and an
/// error to `err`. Returns whether evaluation succeeded.
pub fn eval_and_print(
    interp: &mut Interpreter,
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    match interp.eval_source(source) {
        Ok(Value::Null) => Ok(true),
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind, span = ?e.span, "evaluation failed");
            writeln!(err, "error: {e}")?;
            Ok(false)
        }
    }
}

/// Evaluate every `-e` expression in one interpreter. Later expressions
/// still run after an error.
pub fn run_expressions(
    interp: &mut Interpreter,
    expressions: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    for expr in expressions {
        ok &= eval_and_print(interp, expr, out, err)?;
    }
    Ok(ok)
}

/// Evaluate `input` line by line.
pub fn run_lines(
    interp: &mut Interpreter,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        ok &= eval_and_print(interp, &line, out, err)?;
        out.flush()?;
    }
    Ok(ok)
}
