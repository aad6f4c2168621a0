//! # funkit
//!
//! Optional values, deferred effects and ownership-tracked mutable cells,
//! with direct-style do-blocks that stop at the first missing value.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe) with a diagnostic [`Reason`](control::Reason),
//!   [`Either`](control::Either), and the non-memoizing [`Thunk`](control::Thunk)
//! - **Effect**: [`Action`](effect::Action), a re-runnable computation yielding a `Maybe`;
//!   [`Mut`](effect::Mut), a single-owner cell with explicit copy and transfer;
//!   do-blocks over all of them
//! - **Console**: line-based reading and writing as actions
//!
//! ## Feature Flags
//!
//! - `control`: Maybe, Either, Thunk
//! - `effect`: actions, cells and do-blocks (implies `control`)
//! - `console`: console actions (implies `effect`)
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let total = run_optional_block(|scope| {
//!     let x = scope.unwrap(Maybe::present(40))?;
//!     let y = scope.unwrap(Maybe::from(Some(2)))?;
//!     Ok(x + y)
//! });
//! assert_eq!(total, Maybe::Present(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "console")]
    pub use crate::console::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "console")]
pub mod console;
