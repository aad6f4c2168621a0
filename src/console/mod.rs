//! Console input and output as actions.
//!
//! - [`LineConsole`]: reads lines and writes values over any `BufRead` / `Write` pair
//! - [`Stdio`]: the console over standard input and output
//! - [`ConsoleConfig`]: line ending and flushing, loadable from the environment

mod config;
mod line;

pub use config::{ConfigError, ConsoleConfig, FLUSH_ON_WRITE_VAR, LINE_ENDING_VAR, LineEnding};
pub use line::{LineConsole, Stdio};
