//! Read and write capabilities expressed as actions.
//!
//! Anything that can be read from or written to in an effectful way
//! (a [`Mut`](super::Mut) cell, a [`LineConsole`](crate::console::LineConsole))
//! exposes it through these traits, so code can be written against the
//! capability rather than the concrete source or sink.

use super::Action;

/// A source whose reads are actions.
pub trait ReadAction<T> {
    /// An action that reads one value each time it is invoked.
    fn read(&self) -> Action<T>;
}

/// A sink whose writes are actions.
pub trait WriteAction<T> {
    /// An action that writes `value` each time it is invoked and yields the
    /// written value back.
    fn write(&self, value: T) -> Action<T>;
}
