//! Either type - one of two labelled alternatives.
//!
//! `Either<L, R>` holds exactly one value, either a `Left(L)` or a
//! `Right(R)`. Unlike [`Maybe`], neither side means failure: both are
//! ordinary alternatives and each side can be transformed independently.
//! Mapping the side that is not held only retags the type parameter.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Either, Maybe};
//!
//! let left: Either<i32, String> = Either::Left(42);
//! assert_eq!(left.maybe_left(), Maybe::Present(42));
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let lengths = right.map_right(|s| s.len());
//! assert_eq!(lengths, Either::Right(5));
//! ```

use super::Maybe;

/// A value that is one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Left-biased projection: `Present` for a `Left`, a plain absence for a
    /// `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::{Either, Maybe};
    ///
    /// let right: Either<i32, &str> = Either::Right("r");
    /// assert_eq!(right.maybe_left(), Maybe::Absent(None));
    /// ```
    #[inline]
    pub fn maybe_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Present(value),
            Self::Right(_) => Maybe::Absent(None),
        }
    }

    /// Right-biased projection: `Present` for a `Right`, a plain absence for
    /// a `Left`.
    #[inline]
    pub fn maybe_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Absent(None),
            Self::Right(value) => Maybe::Present(value),
        }
    }

    /// Borrows the left value, if held.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if held.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a left value. A `Right` keeps its value and is
    /// only retagged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(21);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(42));
    ///
    /// let right: Either<i32, String> = Either::Right("same".to_string());
    /// assert_eq!(right.map_left(|x| x * 2), Either::Right("same".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `function` to a right value. A `Left` keeps its value and is
    /// only retagged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Replaces a left value with `value`, keeping the tag.
    #[inline]
    pub fn inherit_left<T>(self, value: T) -> Either<T, R> {
        self.map_left(|_| value)
    }

    /// Replaces a right value with `value`, keeping the tag.
    #[inline]
    pub fn inherit_right<T>(self, value: T) -> Either<L, T> {
        self.map_right(|_| value)
    }

    /// Ignores `self` and returns `other`.
    ///
    /// Forces sequencing when the unions are produced by effectful calls.
    #[inline]
    pub fn then<L2, R2>(self, other: Either<L2, R2>) -> Either<L2, R2> {
        other
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Either` with one function per side.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}
