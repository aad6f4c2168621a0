//! Deferred computation without memoization.
//!
//! A [`Thunk<T>`] is a zero-argument producer of a `T`. Every call to
//! [`force`](Thunk::force) re-runs the underlying computation, so a thunk
//! that performs side effects performs them again each time. Composition
//! (`map`, `chain`, `then`) builds new thunks and never forces an existing
//! one.
//!
//! Thunks are cheap to clone: clones share the same computation.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Thunk;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let thunk = Thunk::new(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! });
//!
//! assert_eq!(thunk.force(), 1);
//! assert_eq!(thunk.force(), 2); // recomputed, not cached
//! ```

use std::fmt;
use std::rc::Rc;

use super::Maybe;

/// A re-executable deferred computation.
///
/// # Type Parameters
///
/// * `T` - The type of the produced value
pub struct Thunk<T> {
    compute: Rc<dyn Fn() -> T>,
}

impl<T: 'static> Thunk<T> {
    /// Creates a thunk from a computation. Nothing runs until it is forced.
    #[inline]
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            compute: Rc::new(compute),
        }
    }

    /// A thunk that always returns `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Thunk;
    ///
    /// let thunk = Thunk::constant("same");
    /// assert_eq!(thunk.force(), "same");
    /// assert_eq!(thunk.force(), "same");
    /// ```
    #[inline]
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Runs the computation and returns its value.
    #[inline]
    pub fn force(&self) -> T {
        (self.compute)()
    }

    /// A thunk that forces `self` and applies `function` to the result.
    pub fn map<U, F>(self, function: F) -> Thunk<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        Thunk::new(move || function(self.force()))
    }

    /// A thunk that forces `self`, builds the next thunk from the result and
    /// forces that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Thunk;
    ///
    /// let thunk = Thunk::constant(10).chain(|x| Thunk::constant(x * 3));
    /// assert_eq!(thunk.force(), 30);
    /// ```
    pub fn chain<U, F>(self, function: F) -> Thunk<U>
    where
        U: 'static,
        F: Fn(T) -> Thunk<U> + 'static,
    {
        Thunk::new(move || function(self.force()).force())
    }

    /// A thunk that forces `self`, discards the result, then forces and
    /// returns `other`.
    pub fn then<U>(self, other: Thunk<U>) -> Thunk<U>
    where
        U: 'static,
    {
        Thunk::new(move || {
            self.force();
            other.force()
        })
    }

    /// A thunk that forces each element in order and collects the results.
    pub fn sequence(thunks: Vec<Self>) -> Thunk<Vec<T>> {
        Thunk::new(move || thunks.iter().map(Self::force).collect())
    }

    /// Moves the deferral outside a `Maybe`: the produced thunk forces the
    /// inner thunk only when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Thunk};
    ///
    /// let lifted = Thunk::lift_maybe(Maybe::present(Thunk::constant(4)));
    /// assert_eq!(lifted.force(), Maybe::Present(4));
    ///
    /// let lifted = Thunk::<i32>::lift_maybe(Maybe::absent());
    /// assert_eq!(lifted.force(), Maybe::Absent(None));
    /// ```
    pub fn lift_maybe(maybe: Maybe<Self>) -> Thunk<Maybe<T>> {
        Thunk::new(move || maybe.as_ref().map(Self::force))
    }
}

impl<T: 'static> Thunk<Thunk<T>> {
    /// Collapses a thunk of a thunk.
    pub fn flatten(self) -> Thunk<T> {
        self.chain(|inner| inner)
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self {
            compute: Rc::clone(&self.compute),
        }
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Thunk(<deferred>)")
    }
}

static_assertions::assert_not_impl_any!(Thunk<i32>: Send, Sync);
