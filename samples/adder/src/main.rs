//! Adder Sample Application Entry Point
//!
//! Reads two integers from standard input, stores each in its own cell and
//! sums them into a third cell inside a do-block. A missing or malformed
//! number stops the program before the sum cell is touched.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::process::ExitCode;
use std::rc::Rc;

use funkit::console::{ConsoleConfig, Stdio};
use funkit::control::{Maybe, Reason};
use funkit::effect::{Action, Mut, ReadAction, WriteAction, run_mutable_block};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            ConsoleConfig::default()
        }
    };
    let console = Stdio::stdio_with_config(config);

    let left = Rc::new(Mut::<i64>::new());
    let right = Rc::new(Mut::<i64>::new());
    let total = Rc::new(Mut::<i64>::new());

    let first = read_into(&console, "first: ", &left);
    let second = read_into(&console, "second: ", &right);
    let add = sum_into(&left, &right, &total);
    let program = run_mutable_block(move |scope| {
        scope.run(&first)?;
        scope.run(&second)?;
        let sum = scope.run(&add)?;
        scope.run(&console.write_line(sum))
    });

    match program.invoke() {
        Maybe::Present(_) => ExitCode::SUCCESS,
        Maybe::Absent(reason) => {
            tracing::info!(reason = ?reason, "no sum produced");
            eprintln!("{}", describe(reason.as_ref()));
            ExitCode::FAILURE
        }
    }
}

/// Prompts, reads one line, parses it and stores the number in `cell`.
fn read_into(console: &Stdio, prompt: &'static str, cell: &Rc<Mut<i64>>) -> Action<i64> {
    let cell = Rc::clone(cell);
    console
        .write(prompt)
        .then(console.read().to_i64())
        .chain(move |number| cell.write(number))
}

/// Stores `left + right` into `total`.
fn sum_into(left: &Rc<Mut<i64>>, right: &Rc<Mut<i64>>, total: &Rc<Mut<i64>>) -> Action<i64> {
    let (left, right, total) = (Rc::clone(left), Rc::clone(right), Rc::clone(total));
    run_mutable_block(move |scope| {
        let sum = scope
            .get(&left)?
            .checked_add(scope.get(&right)?)
            .ok_or_else(|| Reason::message("sum does not fit in 64 bits"))?;
        scope.set(&total, sum)
    })
}

fn describe(reason: Option<&Reason>) -> String {
    reason.map_or_else(
        || "input ended before two numbers were read".to_string(),
        |reason| format!("error: {reason}"),
    )
}
