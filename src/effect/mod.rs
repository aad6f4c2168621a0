//! Effectful actions, mutable cells and do-blocks.
//!
//! This module layers side effects on top of [`crate::control`]:
//!
//! - [`Action`]: a deferred computation producing a [`Maybe`](crate::control::Maybe)
//! - [`combine2`], [`combine3`], [`sequence`], [`sequence_all`]: multi-action helpers
//! - [`ReadAction`] / [`WriteAction`]: read and write capabilities as actions
//! - [`Mut`]: a single-owner mutable cell
//! - [`run_optional_block`], [`run_action_block`], [`run_mutable_block`]:
//!   direct-style do-blocks that stop at the first absence
//!
//! # Action
//!
//! ```rust
//! use funkit::control::Maybe;
//! use funkit::effect::Action;
//!
//! let action = Action::pure(10)
//!     .map(|x| x * 2)
//!     .chain(|x| Action::pure(x + 1));
//!
//! // Nothing runs until invoke is called
//! assert_eq!(action.invoke(), Maybe::Present(21));
//! ```
//!
//! # Do-Blocks
//!
//! ```rust
//! use funkit::control::{Maybe, Reason};
//! use funkit::effect::{Mut, ReadAction, run_mutable_block};
//! use std::rc::Rc;
//!
//! let left = Rc::new(Mut::with_value(2));
//! let right = Rc::new(Mut::<i32>::new());
//! let total = Rc::new(Mut::new());
//!
//! let (a, b, sum) = (Rc::clone(&left), Rc::clone(&right), Rc::clone(&total));
//! let add = run_mutable_block(move |scope| {
//!     let value = scope.get(&a)? + scope.get(&b)?;
//!     scope.set(&sum, value)
//! });
//!
//! assert_eq!(add.invoke(), Maybe::fail(Reason::NotInitialized));
//! assert_eq!(total.read().invoke(), Maybe::fail(Reason::NotInitialized));
//! ```

// =============================================================================
// Action
// =============================================================================

mod action;
mod combine;
mod parse;

pub use action::Action;
pub use combine::{combine2, combine3, sequence, sequence_all};

// =============================================================================
// Capabilities and State
// =============================================================================

mod cell;
mod port;

pub use cell::Mut;
pub use port::{ReadAction, WriteAction};

// =============================================================================
// Do-Blocks
// =============================================================================

mod scope;

pub use scope::{
    ActionScope, Escape, MutableScope, OptionalScope, Step, run_action_block, run_mutable_block,
    run_optional_block,
};
