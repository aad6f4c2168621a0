#![cfg(feature = "console")]
//! Tests for the line console.
//!
//! Input and output are in-memory buffers, so every test sees exactly what
//! the console read and wrote.

use funkit::console::{ConsoleConfig, FLUSH_ON_WRITE_VAR, LINE_ENDING_VAR, LineConsole, LineEnding};
use funkit::control::{Maybe, Reason};
use funkit::effect::{ReadAction, WriteAction, run_action_block};
use rstest::{fixture, rstest};
use std::io::{self, BufRead, Cursor, Read};

type MemoryConsole = LineConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console_with(input: &str) -> MemoryConsole {
    LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn written(console: &MemoryConsole) -> String {
    console.inspect_output(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

#[fixture]
fn numbers() -> MemoryConsole {
    console_with("3\n4\n")
}

// =============================================================================
// Reading
// =============================================================================

mod reading {
    use super::*;

    #[rstest]
    fn reads_one_line_per_invoke(numbers: MemoryConsole) {
        let read = numbers.read();
        assert_eq!(read.invoke(), Maybe::Present("3".to_string()));
        assert_eq!(read.invoke(), Maybe::Present("4".to_string()));
    }

    #[rstest]
    fn end_of_input_is_plain_absence(numbers: MemoryConsole) {
        let read = numbers.read();
        read.invoke();
        read.invoke();
        assert_eq!(read.invoke(), Maybe::Absent(None));
    }

    #[rstest]
    fn empty_line_is_present() {
        let console = console_with("\n");
        assert_eq!(console.read().invoke(), Maybe::Present(String::new()));
    }

    #[rstest]
    fn parsed_read_reports_bad_input() {
        let console = console_with("four\n");
        let result = console.read().to_i32().invoke();
        assert!(matches!(result.reason(), Some(Reason::Parse { target: "i32", .. })));
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    impl BufRead for BrokenReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::other("device gone"))
        }

        fn consume(&mut self, _: usize) {}
    }

    #[rstest]
    fn read_failure_is_io_reason() {
        let console = LineConsole::new(BrokenReader, Vec::new());
        assert_eq!(console.read().invoke(), Maybe::fail(Reason::Io("device gone".to_string())));
    }
}

// =============================================================================
// Writing
// =============================================================================

mod writing {
    use super::*;

    #[rstest]
    fn write_yields_value_back() {
        let console = console_with("");
        assert_eq!(console.write(12).invoke(), Maybe::Present(12));
        assert_eq!(written(&console), "12");
    }

    #[rstest]
    fn write_line_appends_newline() {
        let console = console_with("");
        console.write_line("a").invoke();
        console.write_line(1.5).invoke();
        assert_eq!(written(&console), "a\n1.5\n");
    }

    #[rstest]
    fn nothing_is_written_before_invoke() {
        let console = console_with("");
        let _pending = console.write_line("later");
        assert_eq!(written(&console), "");
    }

    #[rstest]
    fn crlf_configuration() {
        let config = ConsoleConfig::from_lookup(|key| {
            (key == LINE_ENDING_VAR).then(|| "crlf".to_string())
        })
        .unwrap();
        let console = LineConsole::with_config(Cursor::new(Vec::new()), Vec::new(), config);

        console.write_line("x").invoke();
        assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"x\r\n".to_vec());
        assert_eq!(console.config().line_ending, LineEnding::CrLf);
    }

    #[rstest]
    fn unflushed_configuration_still_writes() {
        let config = ConsoleConfig::from_lookup(|key| {
            (key == FLUSH_ON_WRITE_VAR).then(|| "no".to_string())
        })
        .unwrap();
        assert!(!config.flush_on_write);

        let console = LineConsole::with_config(Cursor::new(Vec::new()), Vec::new(), config);
        console.write("buffered").invoke();
        assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"buffered".to_vec());
    }
}

// =============================================================================
// Echo Round Trip
// =============================================================================

mod echo {
    use super::*;

    #[rstest]
    fn doubles_every_number(numbers: MemoryConsole) {
        let console = numbers.clone();
        let read = numbers.read().to_i32();
        let double_one = run_action_block(move |scope| {
            let value = scope.run(&read)?;
            scope.run(&console.write_line(value * 2))
        });

        assert_eq!(double_one.invoke(), Maybe::Present(6));
        assert_eq!(double_one.invoke(), Maybe::Present(8));
        assert_eq!(double_one.invoke(), Maybe::Absent(None));
        assert_eq!(written(&numbers), "6\n8\n");
    }
}
