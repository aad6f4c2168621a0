//! Pure building blocks.
//!
//! - [`Maybe`]: a value, or an absence with an optional [`Reason`]
//! - [`Either`]: one of two labelled alternatives
//! - [`Thunk`]: a deferred, re-executable computation
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Either, Maybe, Thunk};
//!
//! let choice: Either<i32, String> = Either::Left(3);
//! let doubled = Thunk::lift_maybe(choice.maybe_left().map(|x| Thunk::new(move || x * 2)));
//! assert_eq!(doubled.force(), Maybe::Present(6));
//! ```

mod either;
mod maybe;
mod reason;
mod thunk;

pub use either::Either;
pub use maybe::Maybe;
pub use reason::Reason;
pub use thunk::Thunk;
