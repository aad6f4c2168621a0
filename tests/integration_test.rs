#![cfg(all(feature = "effect", feature = "console"))]
//! End-to-end scenarios combining cells, actions, the console and
//! do-blocks.

use funkit::console::LineConsole;
use funkit::control::{Maybe, Reason};
use funkit::effect::{Action, Mut, ReadAction, WriteAction, run_mutable_block};
use rstest::rstest;
use std::io::Cursor;
use std::rc::Rc;

struct Adder {
    left: Rc<Mut<i32>>,
    right: Rc<Mut<i32>>,
    total: Rc<Mut<i32>>,
}

impl Adder {
    fn new(left: Mut<i32>, right: Mut<i32>) -> Self {
        Self {
            left: Rc::new(left),
            right: Rc::new(right),
            total: Rc::new(Mut::new()),
        }
    }

    fn sum(&self) -> Action<i32> {
        let (left, right, total) =
            (Rc::clone(&self.left), Rc::clone(&self.right), Rc::clone(&self.total));
        run_mutable_block(move |scope| {
            let value = scope.get(&left)? + scope.get(&right)?;
            scope.set(&total, value)
        })
    }
}

// =============================================================================
// Summing Two Cells Into a Third
// =============================================================================

#[rstest]
fn sums_two_cells_into_third() {
    let adder = Adder::new(Mut::with_value(2), Mut::with_value(3));

    assert_eq!(adder.sum().invoke(), Maybe::Present(5));
    assert_eq!(adder.total.read().invoke(), Maybe::Present(5));
}

#[rstest]
#[case(Mut::new(), Mut::with_value(3), Reason::NotInitialized)]
#[case(Mut::with_value(2), Mut::new(), Reason::NotInitialized)]
#[case(
    Mut::from_maybe(Maybe::fail(Reason::message("left"))),
    Mut::from_maybe(Maybe::fail(Reason::message("right"))),
    Reason::message("left")
)]
fn absent_source_leaves_destination_untouched(
    #[case] left: Mut<i32>,
    #[case] right: Mut<i32>,
    #[case] expected: Reason,
) {
    let adder = Adder::new(left, right);

    assert_eq!(adder.sum().invoke(), Maybe::fail(expected));
    assert_eq!(adder.total.read().invoke(), Maybe::fail(Reason::NotInitialized));
}

#[rstest]
fn moved_source_is_reported_as_moved() {
    let adder = Adder::new(Mut::with_value(2), Mut::with_value(3));
    let _taken = adder.left.transfer().invoke();

    assert_eq!(adder.sum().invoke(), Maybe::fail(Reason::Moved));
    assert_eq!(adder.total.read().invoke(), Maybe::fail(Reason::NotInitialized));
}

#[rstest]
fn summing_sees_later_writes() {
    let adder = Adder::new(Mut::with_value(1), Mut::new());
    let sum = adder.sum();

    assert!(sum.invoke().is_absent());
    adder.right.write(41).invoke();
    assert_eq!(sum.invoke(), Maybe::Present(42));
}

// =============================================================================
// Reading Operands From the Console
// =============================================================================

fn console_adder(input: &str) -> (Action<i32>, LineConsole<Cursor<Vec<u8>>, Vec<u8>>, Adder) {
    let console = LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let adder = Adder::new(Mut::new(), Mut::new());

    let store = |cell: &Rc<Mut<i32>>| {
        let cell = Rc::clone(cell);
        console.read().to_i32().chain(move |value| cell.write(value))
    };
    let first = store(&adder.left);
    let second = store(&adder.right);
    let sum = adder.sum();
    let output = console.clone();

    let program = run_mutable_block(move |scope| {
        scope.run(&first)?;
        scope.run(&second)?;
        let total = scope.run(&sum)?;
        scope.run(&output.write_line(total))
    });
    (program, console, adder)
}

#[rstest]
fn console_program_prints_sum() {
    let (program, console, adder) = console_adder("19\n23\n");

    assert_eq!(program.invoke(), Maybe::Present(42));
    assert_eq!(console.inspect_output(|bytes| bytes.clone()), b"42\n".to_vec());
    assert_eq!(adder.total.read().invoke(), Maybe::Present(42));
}

#[rstest]
fn console_program_stops_on_bad_number() {
    let (program, console, adder) = console_adder("19\nlots\n");

    let result = program.invoke();
    assert!(matches!(result.reason(), Some(Reason::Parse { .. })));
    assert_eq!(console.inspect_output(|bytes| bytes.len()), 0);
    assert_eq!(adder.left.read().invoke(), Maybe::Present(19));
    assert_eq!(adder.total.read().invoke(), Maybe::fail(Reason::NotInitialized));
}

#[rstest]
fn console_program_stops_at_end_of_input() {
    let (program, _console, adder) = console_adder("7\n");

    assert_eq!(program.invoke(), Maybe::Absent(None));
    assert_eq!(adder.right.read().invoke(), Maybe::fail(Reason::NotInitialized));
}
