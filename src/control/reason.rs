//! The cause carried by an absent value.
//!
//! [`Reason`] is the error type threaded through [`Maybe`](super::Maybe),
//! [`Action`](crate::effect::Action) and the do-blocks. It is cloneable and
//! comparable so that an absent value can be inspected, asserted on and
//! passed along without losing the original cause.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Reason;
//!
//! let reason = Reason::message("disk on fire");
//! assert_eq!(reason.to_string(), "disk on fire");
//! assert_eq!(Reason::Moved.to_string(), "value has been moved");
//! ```

use std::any::Any;
use std::fmt::Display;

use thiserror::Error;

/// Why a value is absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum Reason {
    /// A mutable cell was read before anything was written to it.
    #[error("value not initialized")]
    NotInitialized,

    /// A mutable cell was read after its value was transferred out.
    #[error("value has been moved")]
    Moved,

    /// A free-form failure, usually a caught error rendered to text.
    #[error("{0}")]
    Message(String),

    /// Text could not be converted into the requested type.
    #[error("cannot parse {input:?} as {target}: {message}")]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// Name of the requested type.
        target: &'static str,
        /// The parser's own error message.
        message: String,
    },

    /// A computation panicked inside [`Maybe::catch_unwind`](super::Maybe::catch_unwind).
    #[error("panicked: {0}")]
    Panic(String),

    /// An input or output operation failed.
    #[error("i/o failure: {0}")]
    Io(String),
}

impl Reason {
    /// Creates a [`Reason::Message`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Reason;
    ///
    /// assert_eq!(Reason::message("x"), Reason::Message("x".to_string()));
    /// ```
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Renders any displayable error into a [`Reason::Message`].
    pub fn from_error<E: Display>(error: E) -> Self {
        Self::Message(error.to_string())
    }

    /// Converts a panic payload into a [`Reason::Panic`].
    pub(crate) fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "unknown panic".to_string()
        };
        Self::Panic(message)
    }
}

impl From<std::io::Error> for Reason {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reason_names_input_and_target() {
        let reason = Reason::Parse {
            input: "abc".to_string(),
            target: "i32",
            message: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            reason.to_string(),
            "cannot parse \"abc\" as i32: invalid digit found in string"
        );
    }

    #[test]
    fn panic_payload_strings_are_kept() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(Reason::from_panic(payload.as_ref()), Reason::Panic("boom".to_string()));

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(Reason::from_panic(payload.as_ref()), Reason::Panic("bang".to_string()));

        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(
            Reason::from_panic(payload.as_ref()),
            Reason::Panic("unknown panic".to_string())
        );
    }

    #[test]
    fn io_errors_convert() {
        let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(Reason::from(error), Reason::Io("pipe closed".to_string()));
    }
}
