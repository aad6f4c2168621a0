//! Console configuration.
//!
//! Settings are loaded from environment variables with explicit error
//! handling. Every setting has a default, so a missing variable is never an
//! error; a malformed one is.
//!
//! | Variable                | Values                       | Default |
//! |-------------------------|------------------------------|---------|
//! | `FUNKIT_LINE_ENDING`    | `lf`, `crlf`                 | `lf`    |
//! | `FUNKIT_FLUSH_ON_WRITE` | `true`/`false`, `1`/`0`, `yes`/`no` | `true`  |
//!
//! # Example
//!
//! ```rust
//! use funkit::console::{ConsoleConfig, LineEnding};
//!
//! let config = ConsoleConfig::from_lookup(|key| match key {
//!     "FUNKIT_LINE_ENDING" => Some("crlf".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.line_ending, LineEnding::CrLf);
//! assert!(config.flush_on_write);
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the line terminator.
pub const LINE_ENDING_VAR: &str = "FUNKIT_LINE_ENDING";
/// Environment variable selecting whether every write is flushed.
pub const FLUSH_ON_WRITE_VAR: &str = "FUNKIT_FLUSH_ON_WRITE";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// The terminator appended by [`write_line`](super::LineConsole::write_line).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            other => Err(format!("expected `lf` or `crlf`, found `{other}`")),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        })
    }
}

/// Settings for a [`LineConsole`](super::LineConsole).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Terminator appended by `write_line`.
    pub line_ending: LineEnding,
    /// Whether the output is flushed after every write.
    pub flush_on_write: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            flush_on_write: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable has an invalid value.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let line_ending = get_optional_parsed(&lookup, LINE_ENDING_VAR, defaults.line_ending, |value| {
            value.parse()
        })?;
        let flush_on_write =
            get_optional_parsed(&lookup, FLUSH_ON_WRITE_VAR, defaults.flush_on_write, parse_flag)?;

        Ok(Self {
            line_ending,
            flush_on_write,
        })
    }
}

/// Reads an optional variable and parses it, with a default value.
fn get_optional_parsed<T, L, P>(
    lookup: &L,
    key: &str,
    default: T,
    parse: P,
) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    P: FnOnce(&str) -> Result<T, String>,
{
    lookup(key).map_or(Ok(default), |value| {
        parse(&value).map_err(|message| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        })
    })
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(format!("expected a boolean, found `{other}`")),
    }
}
