//! Action - a deferred, possibly failing, side-effecting computation.
//!
//! An [`Action<T>`] wraps a [`Thunk`] producing a [`Maybe<T>`]. Building and
//! composing actions never runs anything; only [`invoke`](Action::invoke)
//! does, and it runs the effects again on every call.
//!
//! # Design Philosophy
//!
//! An action "describes" a side effect. Failures inside it are data: an
//! absent result flows through `map` and `chain` without calling the
//! downstream functions, and the caller decides what to do with it after
//! invoking.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::effect::Action;
//!
//! let action = Action::pure(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Action::pure(x + 1));
//! assert_eq!(action.invoke(), Maybe::Present(21));
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::effect::Action;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//! let action = Action::new(move || {
//!     counter.set(counter.get() + 1);
//!     Maybe::present(counter.get())
//! });
//!
//! assert_eq!(runs.get(), 0);
//! assert_eq!(action.invoke(), Maybe::Present(1));
//! assert_eq!(action.invoke(), Maybe::Present(2));
//! ```

use std::fmt::{self, Display};

use crate::control::{Maybe, Reason, Thunk};

/// A deferred computation that may perform side effects and may fail.
///
/// # Type Parameters
///
/// - `T`: The type of the value produced on success.
pub struct Action<T> {
    run: Thunk<Maybe<T>>,
}

impl<T: 'static> Action<T> {
    /// Creates an action from a closure. The closure runs on every
    /// [`invoke`](Self::invoke).
    #[inline]
    pub fn new<F>(run: F) -> Self
    where
        F: Fn() -> Maybe<T> + 'static,
    {
        Self {
            run: Thunk::new(run),
        }
    }

    /// Wraps a thunk that produces a `Maybe`.
    #[inline]
    pub const fn from_thunk(run: Thunk<Maybe<T>>) -> Self {
        Self { run }
    }

    /// Wraps a thunk whose every value counts as present.
    pub fn from_value_thunk(thunk: Thunk<T>) -> Self {
        Self::from_thunk(thunk.map(Maybe::Present))
    }

    /// An action that always succeeds with `value`.
    #[inline]
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_thunk(Thunk::constant(Maybe::Present(value)))
    }

    /// An action that always yields a plain absence.
    pub fn absent() -> Self {
        Self::new(Maybe::absent)
    }

    /// An action that always fails with `reason`.
    pub fn fail(reason: Reason) -> Self {
        Self::new(move || Maybe::fail(reason.clone()))
    }

    /// An action running a fallible call through [`Maybe::catching`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::effect::Action;
    ///
    /// let action = Action::catching(|| std::env::var("FUNKIT_SURELY_UNSET_VARIABLE"));
    /// assert!(action.invoke().is_absent());
    /// ```
    pub fn catching<E, F>(call: F) -> Self
    where
        E: Display,
        F: Fn() -> Result<T, E> + 'static,
    {
        Self::new(move || Maybe::catching(&call))
    }

    /// Runs the action, performing its side effects, and returns the result.
    ///
    /// Nothing is cached: invoking twice runs the effects twice.
    #[inline]
    pub fn invoke(&self) -> Maybe<T> {
        self.run.force()
    }

    /// Unwraps the underlying thunk.
    #[inline]
    pub fn into_thunk(self) -> Thunk<Maybe<T>> {
        self.run
    }

    /// Transforms the eventual value. `function` is never called when the
    /// result is absent.
    pub fn map<U, F>(self, function: F) -> Action<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Action::new(move || self.invoke().map(&function))
    }

    /// Continues with the action built from the eventual value.
    ///
    /// The continuation is only built, and only invoked, after `self`
    /// produced a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    /// use funkit::effect::Action;
    ///
    /// let failing: Action<i32> = Action::fail(Reason::message("nope"));
    /// let chained = failing.chain(|x| Action::pure(x + 1));
    /// assert_eq!(chained.invoke(), Maybe::fail(Reason::message("nope")));
    /// ```
    pub fn chain<U, F>(self, function: F) -> Action<U>
    where
        U: 'static,
        F: Fn(T) -> Action<U> + 'static,
    {
        Action::new(move || self.invoke().chain(|value| function(value).invoke()))
    }

    /// Alias for [`chain`](Self::chain).
    pub fn and_then<U, F>(self, function: F) -> Action<U>
    where
        U: 'static,
        F: Fn(T) -> Action<U> + 'static,
    {
        self.chain(function)
    }

    /// Like [`map`](Self::map) for a function that may itself produce an
    /// absence.
    pub fn map_maybe<U, F>(self, function: F) -> Action<U>
    where
        U: 'static,
        F: Fn(T) -> Maybe<U> + 'static,
    {
        Action::new(move || self.invoke().chain(&function))
    }

    /// Runs `self` for its effects, discards its result, then runs `next`
    /// and returns its result.
    pub fn then<U>(self, next: Action<U>) -> Action<U>
    where
        U: 'static,
    {
        Action::new(move || {
            self.invoke();
            next.invoke()
        })
    }

    /// Runs `self`, then runs `next` for its effects only, and returns the
    /// result of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::effect::Action;
    ///
    /// let action = Action::pure(1).also(Action::pure("ignored"));
    /// assert_eq!(action.invoke(), Maybe::Present(1));
    /// ```
    pub fn also<U>(self, next: Action<U>) -> Self
    where
        U: 'static,
    {
        Self::new(move || {
            let result = self.invoke();
            next.invoke();
            result
        })
    }

    /// Combines the results of `self` and `other` with `function`, running
    /// `self` first. `other` is not run when `self` is absent.
    pub fn zip_with<U, V, F>(self, other: Action<U>, function: F) -> Action<V>
    where
        U: 'static,
        V: 'static,
        F: Fn(T, U) -> V + 'static,
    {
        super::combine2(self, other, function)
    }
}

impl<T: Clone + 'static> From<Maybe<T>> for Action<T> {
    fn from(maybe: Maybe<T>) -> Self {
        Self::from_thunk(Thunk::constant(maybe))
    }
}

impl<T: 'static> From<Thunk<Maybe<T>>> for Action<T> {
    fn from(run: Thunk<Maybe<T>>) -> Self {
        Self::from_thunk(run)
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Action(<deferred>)")
    }
}

static_assertions::assert_not_impl_any!(Action<i32>: Send, Sync);
