//! Maybe type - a value, or an absence with an optional cause.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent(Option<Reason>)`. It plays
//! the role of both `Option` and `Result`: an absence can be silent (end of
//! input, failed cast) or carry the [`Reason`] it failed.
//!
//! Transformations never touch an absent value's reason and never call their
//! function argument on it; the reason is threaded forward verbatim.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Maybe, Reason};
//!
//! let present = Maybe::present(20).map(|x| x + 1).chain(|x| Maybe::present(x * 2));
//! assert_eq!(present, Maybe::Present(42));
//!
//! let absent: Maybe<i32> = Maybe::fail(Reason::message("no input"));
//! let result = absent.map(|x| x + 1);
//! assert_eq!(result.reason(), Some(&Reason::message("no input")));
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Reason;

/// A value, or the absence of one with an optional cause.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value. `None` means a plain absence, `Some` a failure with a cause.
    Absent(Option<Reason>),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// A plain absence with no cause.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent(None)
    }

    /// An absence caused by `reason`.
    #[inline]
    pub const fn fail(reason: Reason) -> Self {
        Self::Absent(Some(reason))
    }

    /// Runs a fallible call, turning `Ok` into `Present` and `Err` into an
    /// absence whose reason is the rendered error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    ///
    /// let parsed = Maybe::catching(|| "12".parse::<i32>());
    /// assert_eq!(parsed, Maybe::Present(12));
    ///
    /// let failed = Maybe::catching(|| "x".parse::<i32>());
    /// assert_eq!(failed, Maybe::fail(Reason::message("invalid digit found in string")));
    /// ```
    pub fn catching<E, F>(call: F) -> Self
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        match call() {
            Ok(value) => Self::Present(value),
            Err(error) => Self::fail(Reason::from_error(error)),
        }
    }

    /// Runs a call that may panic, turning a panic into [`Reason::Panic`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    ///
    /// let exploded: Maybe<i32> = Maybe::catch_unwind(|| panic!("boom"));
    /// assert_eq!(exploded, Maybe::fail(Reason::Panic("boom".to_string())));
    /// ```
    pub fn catch_unwind<F>(call: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(call)) {
            Ok(value) => Self::Present(value),
            Err(payload) => Self::fail(Reason::from_panic(payload.as_ref())),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent(_))
    }

    /// The cause of an absence, if one was captured.
    #[inline]
    pub const fn reason(&self) -> Option<&Reason> {
        match self {
            Self::Present(_) | Self::Absent(None) => None,
            Self::Absent(Some(reason)) => Some(reason),
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent(reason) => Maybe::Absent(reason.clone()),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a present value. An absence is returned as is
    /// and `function` is not called.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent(reason) => Maybe::Absent(reason),
        }
    }

    /// Runs `function` on a present value and returns its result directly,
    /// which lets a step produce its own absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    ///
    /// let halve = |x: i32| {
    ///     if x % 2 == 0 { Maybe::present(x / 2) } else { Maybe::fail(Reason::message("odd")) }
    /// };
    /// assert_eq!(Maybe::present(8).chain(halve), Maybe::Present(4));
    /// assert_eq!(Maybe::present(7).chain(halve), Maybe::fail(Reason::message("odd")));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent(reason) => Maybe::Absent(reason),
        }
    }

    /// Alias for [`chain`](Self::chain).
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.chain(function)
    }

    /// Discards a present value in favour of `other`. An absence wins over
    /// `other`.
    #[inline]
    pub fn then<U>(self, other: Maybe<U>) -> Maybe<U> {
        self.chain(|_| other)
    }

    /// Discards a present value in favour of `value`, keeping an absence.
    #[inline]
    pub fn replace_with<U>(self, value: U) -> Maybe<U> {
        self.map(|_| value)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the value, or computes a fallback from the absence's reason.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    ///
    /// let absent: Maybe<String> = Maybe::fail(Reason::message("gone"));
    /// let text = absent.get_or_else(|reason| format!("fallback ({})", reason.unwrap()));
    /// assert_eq!(text, "fallback (gone)");
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Option<Reason>) -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent(reason) => fallback(reason),
        }
    }

    /// Returns the value, or `default` when absent.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        self.get_or_else(|_| default)
    }

    /// Extracts the value, or yields the captured reason as an error (or
    /// `default_reason` when none was captured).
    ///
    /// Inside a do-block the error exits the block through `?`; see
    /// [`run_optional_block`](crate::effect::run_optional_block).
    ///
    /// # Errors
    ///
    /// Returns the captured [`Reason`], or `default_reason` for a plain
    /// absence.
    #[inline]
    pub fn throw_on_absent(self, default_reason: Reason) -> Result<T, Reason> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent(reason) => Err(reason.unwrap_or(default_reason)),
        }
    }

    /// Eliminates the `Maybe` with one function per variant.
    #[inline]
    pub fn fold<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce(Option<Reason>) -> U,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent(reason) => on_absent(reason),
        }
    }

    /// Converts into an `Option`, dropping any reason.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent(_) => None,
        }
    }

    /// Converts into a `Result` whose error is the (optional) reason.
    ///
    /// # Errors
    ///
    /// Returns the absence's optional reason.
    #[inline]
    pub fn into_result(self) -> Result<T, Option<Reason>> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent(reason) => Err(reason),
        }
    }

    // =========================================================================
    // Sequence Lifting
    // =========================================================================

    /// Turns a sequence of `Maybe` values into a `Maybe` of all the values.
    ///
    /// Stops at the first absence and adopts its reason; elements after it
    /// are not pulled from the iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Maybe, Reason};
    ///
    /// let all = Maybe::sequence(vec![Maybe::present(1), Maybe::present(2)]);
    /// assert_eq!(all, Maybe::Present(vec![1, 2]));
    ///
    /// let broken = Maybe::sequence(vec![
    ///     Maybe::present(1),
    ///     Maybe::fail(Reason::message("x")),
    ///     Maybe::present(3),
    /// ]);
    /// assert_eq!(broken, Maybe::fail(Reason::message("x")));
    /// ```
    pub fn sequence<I>(values: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        values.into_iter().collect()
    }
}

impl<T: 'static> Maybe<T> {
    /// Present if the boxed value's dynamic type is `T`, a plain absence
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use funkit::control::Maybe;
    ///
    /// let boxed: Box<dyn Any> = Box::new(5_i32);
    /// assert_eq!(Maybe::<i32>::cast(boxed), Maybe::Present(5));
    ///
    /// let boxed: Box<dyn Any> = Box::new("five");
    /// assert!(Maybe::<i32>::cast(boxed).is_absent());
    /// ```
    pub fn cast(value: Box<dyn Any>) -> Self {
        value
            .downcast::<T>()
            .map_or(Self::Absent(None), |value| Self::Present(*value))
    }

    /// Like [`cast`](Self::cast) for a borrowed value, cloning on success.
    pub fn cast_ref(value: &dyn Any) -> Self
    where
        T: Clone,
    {
        value.downcast_ref::<T>().cloned().into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Absent(None)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent(None), Self::Present)
    }
}

impl<T> From<Result<T, Option<Reason>>> for Maybe<T> {
    fn from(value: Result<T, Option<Reason>>) -> Self {
        match value {
            Ok(value) => Self::Present(value),
            Err(reason) => Self::Absent(reason),
        }
    }
}

impl<T> From<Result<T, Reason>> for Maybe<T> {
    fn from(value: Result<T, Reason>) -> Self {
        match value {
            Ok(value) => Self::Present(value),
            Err(reason) => Self::fail(reason),
        }
    }
}

impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_result)
            .collect::<Result<C, Option<Reason>>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn map_on_absent_skips_function() {
        let calls = Cell::new(0);
        let absent: Maybe<i32> = Maybe::fail(Reason::message("r"));
        let result = absent.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(result, Maybe::fail(Reason::message("r")));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn then_short_circuits_on_absent() {
        let absent: Maybe<i32> = Maybe::absent();
        assert_eq!(absent.then(Maybe::present("other")), Maybe::Absent(None));
        assert_eq!(Maybe::present(1).then(Maybe::present("other")), Maybe::Present("other"));
    }

    #[test]
    fn throw_on_absent_prefers_captured_reason() {
        let plain: Maybe<i32> = Maybe::absent();
        assert_eq!(plain.throw_on_absent(Reason::message("default")), Err(Reason::message("default")));

        let failed: Maybe<i32> = Maybe::fail(Reason::Moved);
        assert_eq!(failed.throw_on_absent(Reason::message("default")), Err(Reason::Moved));
    }

    #[test]
    fn sequence_stops_pulling_after_first_absence() {
        let pulled = Cell::new(0);
        let values = (0..5).map(|index| {
            pulled.set(pulled.get() + 1);
            if index == 1 {
                Maybe::fail(Reason::message("x"))
            } else {
                Maybe::present(index)
            }
        });
        assert_eq!(Maybe::sequence(values), Maybe::fail(Reason::message("x")));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn cast_ref_clones_matching_value() {
        let text = String::from("hello");
        assert_eq!(Maybe::<String>::cast_ref(&text), Maybe::Present("hello".to_string()));
        assert_eq!(Maybe::<i64>::cast_ref(&text), Maybe::Absent(None));
    }
}
