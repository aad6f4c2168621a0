//! Line-based console adapter.
//!
//! [`LineConsole`] turns a buffered reader and a writer into actions: reading
//! yields one line per invocation, writing prints a value and yields it back.
//! [`Stdio`] is the instance bound to standard input and output.
//!
//! # Examples
//!
//! ```rust
//! use funkit::console::LineConsole;
//! use funkit::control::Maybe;
//! use funkit::effect::ReadAction;
//! use std::io::Cursor;
//!
//! let console = LineConsole::new(Cursor::new(b"21\n".to_vec()), Vec::new());
//! let doubled = console.read().to_i32().map(|x| x * 2);
//! let report = doubled.chain({
//!     let console = console.clone();
//!     move |x| console.write_line(x)
//! });
//!
//! assert_eq!(report.invoke(), Maybe::Present(42));
//! assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"42\n".to_vec());
//! ```

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::rc::Rc;

use crate::control::{Maybe, Reason};
use crate::effect::{Action, ReadAction, WriteAction};

use super::ConsoleConfig;

/// A console reading lines from `R` and writing to `W`.
///
/// Clones share the same reader and writer.
pub struct LineConsole<R, W> {
    input: Rc<RefCell<R>>,
    output: Rc<RefCell<W>>,
    config: ConsoleConfig,
}

/// The console bound to the process's standard input and output.
pub type Stdio = LineConsole<BufReader<Stdin>, Stdout>;

impl Stdio {
    /// Standard input and output with the default configuration.
    pub fn stdio() -> Self {
        Self::stdio_with_config(ConsoleConfig::default())
    }

    /// Standard input and output with `config`.
    pub fn stdio_with_config(config: ConsoleConfig) -> Self {
        Self::with_config(BufReader::new(io::stdin()), io::stdout(), config)
    }
}

impl<R, W> LineConsole<R, W>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    /// A console over `input` and `output` with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, ConsoleConfig::default())
    }

    /// A console over `input` and `output` with `config`.
    pub fn with_config(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input: Rc::new(RefCell::new(input)),
            output: Rc::new(RefCell::new(output)),
            config,
        }
    }

    /// The active configuration.
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Writes `value` followed by the configured line ending and yields
    /// `value` back.
    pub fn write_line<T>(&self, value: T) -> Action<T>
    where
        T: Display + Clone + 'static,
    {
        self.emit(value, self.config.line_ending.as_str())
    }

    /// Gives `inspect` a look at the writer, e.g. to check captured output.
    pub fn inspect_output<U, F>(&self, inspect: F) -> U
    where
        F: FnOnce(&W) -> U,
    {
        inspect(&self.output.borrow())
    }

    fn emit<T>(&self, value: T, suffix: &'static str) -> Action<T>
    where
        T: Display + Clone + 'static,
    {
        let output = Rc::clone(&self.output);
        let flush = self.config.flush_on_write;
        Action::new(move || {
            let mut output = output.borrow_mut();
            let written = write!(output, "{value}{suffix}").and_then(|()| {
                if flush { output.flush() } else { Ok(()) }
            });
            match written {
                Ok(()) => Maybe::Present(value.clone()),
                Err(error) => {
                    tracing::warn!(%error, "console write failed");
                    Maybe::fail(Reason::from(error))
                }
            }
        })
    }
}

impl<R, W> ReadAction<String> for LineConsole<R, W>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    /// Reads one line without its terminator. End of input is a plain
    /// absence; a read error is a failure.
    fn read(&self) -> Action<String> {
        let input = Rc::clone(&self.input);
        Action::new(move || {
            let mut line = String::new();
            match input.borrow_mut().read_line(&mut line) {
                Ok(0) => {
                    tracing::debug!("console reached end of input");
                    Maybe::absent()
                }
                Ok(_) => {
                    strip_line_ending(&mut line);
                    Maybe::Present(line)
                }
                Err(error) => {
                    tracing::warn!(%error, "console read failed");
                    Maybe::fail(Reason::from(error))
                }
            }
        })
    }
}

impl<R, W, T> WriteAction<T> for LineConsole<R, W>
where
    R: BufRead + 'static,
    W: Write + 'static,
    T: Display + Clone + 'static,
{
    fn write(&self, value: T) -> Action<T> {
        self.emit(value, "")
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R, W> Clone for LineConsole<R, W> {
    fn clone(&self) -> Self {
        Self {
            input: Rc::clone(&self.input),
            output: Rc::clone(&self.output),
            config: self.config,
        }
    }
}

impl<R, W> fmt::Debug for LineConsole<R, W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LineConsole")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::LineEnding;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn strips_lf_and_crlf() {
        let console = console("one\r\ntwo\nthree");
        let read = console.read();
        assert_eq!(read.invoke(), Maybe::Present("one".to_string()));
        assert_eq!(read.invoke(), Maybe::Present("two".to_string()));
        assert_eq!(read.invoke(), Maybe::Present("three".to_string()));
        assert_eq!(read.invoke(), Maybe::Absent(None));
    }

    #[test]
    fn write_line_uses_configured_ending() {
        let config = ConsoleConfig {
            line_ending: LineEnding::CrLf,
            flush_on_write: false,
        };
        let console = LineConsole::with_config(Cursor::new(Vec::new()), Vec::new(), config);
        assert_eq!(console.write_line("hi").invoke(), Maybe::Present("hi"));
        assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"hi\r\n".to_vec());
    }

    #[test]
    fn writes_happen_on_every_invoke() {
        let console = console("");
        let write = console.write(7);
        write.invoke();
        write.invoke();
        assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"77".to_vec());
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let console = LineConsole::new(Cursor::new(Vec::new()), BrokenWriter);
        assert_eq!(console.write("x").invoke(), Maybe::fail(Reason::Io("closed".to_string())));
    }
}
