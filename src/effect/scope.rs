//! Do-blocks: direct-style code over `Maybe`, `Action` and `Mut`.
//!
//! A do-block is a closure run by one of the boundary functions
//! ([`run_optional_block`], [`run_action_block`], [`run_mutable_block`]).
//! Inside it, a scope object unwraps values directly and returns
//! [`Step<T>`]; `?` on an absent step exits the block, and the boundary
//! turns the exit back into an absent [`Maybe`]. The early exit never
//! travels past the boundary.
//!
//! The scopes are layered: [`MutableScope`] derefs to [`ActionScope`],
//! which derefs to [`OptionalScope`], so each level has every capability of
//! the one below.
//!
//! # Syntax
//!
//! ```text
//! scope.unwrap(maybe)?     (!maybe)?          // OptionalScope
//! scope.run(&action)?      (!&action)?        // ActionScope
//! scope.get(&cell)?        (!&cell)?          // MutableScope
//! scope.transfer(&cell)?   (-&cell)?
//! scope.set(&cell, v)?  scope.update(&cell, f)?  scope.copy(&cell)?
//! ```
//!
//! `?` binds tighter than the prefix operators, hence the parentheses.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Maybe, Reason};
//! use funkit::effect::run_optional_block;
//!
//! let sum = run_optional_block(|scope| {
//!     let x = scope.unwrap(Maybe::present(2))?;
//!     let y = (!Maybe::present(3))?;
//!     Ok(x + y)
//! });
//! assert_eq!(sum, Maybe::Present(5));
//!
//! let stopped: Maybe<i32> = run_optional_block(|scope| {
//!     let x = scope.unwrap(Maybe::<i32>::fail(Reason::message("no x")))?;
//!     Ok(x + 1)
//! });
//! assert_eq!(stopped, Maybe::fail(Reason::message("no x")));
//! ```

use std::ops::{Deref, Neg, Not};

use crate::control::{Maybe, Reason};

use super::{Action, Mut, ReadAction, WriteAction};

/// The signal that exits a do-block early.
///
/// It carries the absence's reason to the block's boundary. It can be
/// produced by the scopes and by `?` on a `Result<_, Reason>`, but it can
/// only be taken apart by a boundary function.
#[derive(Debug)]
pub struct Escape {
    reason: Option<Reason>,
}

impl Escape {
    const fn new(reason: Option<Reason>) -> Self {
        Self { reason }
    }
}

impl From<Reason> for Escape {
    fn from(reason: Reason) -> Self {
        Self::new(Some(reason))
    }
}

/// The result of one statement in a do-block.
pub type Step<T> = Result<T, Escape>;

fn settle<T>(step: Step<T>) -> Maybe<T> {
    match step {
        Ok(value) => Maybe::Present(value),
        Err(Escape { reason }) => {
            tracing::debug!(reason = ?reason, "do-block exited early");
            Maybe::Absent(reason)
        }
    }
}

// =============================================================================
// Scopes
// =============================================================================

/// The base scope: unwraps [`Maybe`] values.
#[derive(Debug)]
pub struct OptionalScope {
    _sealed: (),
}

impl OptionalScope {
    const fn new() -> Self {
        Self { _sealed: () }
    }

    /// Extracts a present value, or exits the block with the absence's
    /// reason.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] carrying the reason when `maybe` is absent.
    pub fn unwrap<T>(&self, maybe: Maybe<T>) -> Step<T> {
        !maybe
    }

    /// Exits the block with `reason`.
    ///
    /// # Errors
    ///
    /// Always returns an [`Escape`] carrying `reason`.
    pub fn fail<T>(&self, reason: Reason) -> Step<T> {
        Err(Escape::from(reason))
    }
}

/// Adds running actions to [`OptionalScope`].
#[derive(Debug)]
pub struct ActionScope {
    base: OptionalScope,
}

impl ActionScope {
    const fn new() -> Self {
        Self {
            base: OptionalScope::new(),
        }
    }

    /// Invokes `action` and unwraps its result.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] when the action's result is absent.
    pub fn run<T: 'static>(&self, action: &Action<T>) -> Step<T> {
        !action
    }
}

impl Deref for ActionScope {
    type Target = OptionalScope;

    fn deref(&self) -> &OptionalScope {
        &self.base
    }
}

/// Adds cell access to [`ActionScope`].
#[derive(Debug)]
pub struct MutableScope {
    base: ActionScope,
}

impl MutableScope {
    const fn new() -> Self {
        Self {
            base: ActionScope::new(),
        }
    }

    /// Reads the cell's value.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] when the cell is absent, uninitialized or moved.
    pub fn get<T: Clone + 'static>(&self, cell: &Mut<T>) -> Step<T> {
        !cell
    }

    /// Writes `value` into the cell and returns it.
    ///
    /// # Errors
    ///
    /// Never fails for a plain write; the signature matches the other steps.
    pub fn set<T: Clone + 'static>(&self, cell: &Mut<T>, value: T) -> Step<T> {
        self.run(&cell.write(value))
    }

    /// Replaces the cell's value with `function` applied to it.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] when the cell holds no value.
    pub fn update<T, F>(&self, cell: &Mut<T>, function: F) -> Step<T>
    where
        T: Clone + 'static,
        F: Fn(T) -> T + 'static,
    {
        self.run(&cell.update(function))
    }

    /// A new independent cell holding a copy of the value.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] when the cell holds no value.
    pub fn copy<T: Clone + 'static>(&self, cell: &Mut<T>) -> Step<Mut<T>> {
        self.run(&cell.copy())
    }

    /// Moves the value into a new cell, leaving `cell` moved-from.
    ///
    /// # Errors
    ///
    /// Returns an [`Escape`] when the cell holds no value.
    pub fn transfer<T: Clone + 'static>(&self, cell: &Mut<T>) -> Step<Mut<T>> {
        -cell
    }
}

impl Deref for MutableScope {
    type Target = ActionScope;

    fn deref(&self) -> &ActionScope {
        &self.base
    }
}

// =============================================================================
// Boundaries
// =============================================================================

/// Runs `block` with an [`OptionalScope`] and returns its value, or the
/// absence that stopped it.
pub fn run_optional_block<T, F>(block: F) -> Maybe<T>
where
    F: FnOnce(&OptionalScope) -> Step<T>,
{
    settle(block(&OptionalScope::new()))
}

/// Wraps `block` into an action. Each invocation runs the block anew with
/// an [`ActionScope`].
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::effect::{Action, run_action_block};
///
/// let first = Action::pure(20);
/// let second = Action::pure(22);
/// let sum = run_action_block(move |scope| Ok(scope.run(&first)? + (!&second)?));
/// assert_eq!(sum.invoke(), Maybe::Present(42));
/// ```
pub fn run_action_block<T, F>(block: F) -> Action<T>
where
    T: 'static,
    F: Fn(&ActionScope) -> Step<T> + 'static,
{
    Action::new(move || settle(block(&ActionScope::new())))
}

/// Wraps `block` into an action. Each invocation runs the block anew with
/// a [`MutableScope`].
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::effect::{Mut, ReadAction, run_mutable_block};
/// use std::rc::Rc;
///
/// let counter = Rc::new(Mut::with_value(0));
/// let handle = Rc::clone(&counter);
/// let increment = run_mutable_block(move |scope| scope.update(&handle, |n| n + 1));
///
/// increment.invoke();
/// increment.invoke();
/// assert_eq!(counter.read().invoke(), Maybe::Present(2));
/// ```
pub fn run_mutable_block<T, F>(block: F) -> Action<T>
where
    T: 'static,
    F: Fn(&MutableScope) -> Step<T> + 'static,
{
    Action::new(move || settle(block(&MutableScope::new())))
}

// =============================================================================
// Operator shorthand
// =============================================================================

impl<T> Not for Maybe<T> {
    type Output = Step<T>;

    fn not(self) -> Step<T> {
        self.into_result().map_err(Escape::new)
    }
}

impl<T: 'static> Not for &Action<T> {
    type Output = Step<T>;

    fn not(self) -> Step<T> {
        !self.invoke()
    }
}

impl<T: Clone + 'static> Not for &Mut<T> {
    type Output = Step<T>;

    fn not(self) -> Step<T> {
        !self.read().invoke()
    }
}

impl<T: Clone + 'static> Neg for &Mut<T> {
    type Output = Step<Mut<T>>;

    fn neg(self) -> Step<Mut<T>> {
        !self.transfer().invoke()
    }
}
