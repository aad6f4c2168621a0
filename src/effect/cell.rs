//! Single-owner mutable cell.
//!
//! A [`Mut<T>`] is a storage slot whose reads and writes are [`Action`]s.
//! It starts either holding a value or absent with
//! [`Reason::NotInitialized`].
//!
//! Ownership of the stored value is explicit:
//!
//! - [`copy`](Mut::copy) seeds a new, independent cell with the current value;
//!   the two cells diverge on later writes.
//! - [`transfer`](Mut::transfer) moves the value into a new cell and leaves the
//!   source absent with [`Reason::Moved`]; later reads of the source fail
//!   with that reason.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Maybe, Reason};
//! use funkit::effect::{Mut, ReadAction, WriteAction};
//!
//! let cell = Mut::with_value(5);
//! let moved = cell.transfer().invoke().get_or_else(|_| Mut::new());
//!
//! assert_eq!(moved.read().invoke(), Maybe::Present(5));
//! assert_eq!(cell.read().invoke(), Maybe::fail(Reason::Moved));
//!
//! cell.write(1).invoke();
//! assert_eq!(cell.read().invoke(), Maybe::Present(1));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::control::{Maybe, Reason};

use super::{Action, ReadAction, WriteAction};

/// A mutable slot holding at most one live value.
///
/// Not `Clone`: a second handle to the same slot would be a second owner.
/// Use [`copy`](Self::copy) or [`transfer`](Self::transfer) instead.
pub struct Mut<T> {
    slot: Rc<RefCell<Maybe<T>>>,
}

impl<T: Clone + 'static> Mut<T> {
    /// An uninitialized cell. Reading it fails with
    /// [`Reason::NotInitialized`] until something is written.
    pub fn new() -> Self {
        Self::from_maybe(Maybe::fail(Reason::NotInitialized))
    }

    /// A cell holding `value`.
    pub fn with_value(value: T) -> Self {
        Self::from_maybe(Maybe::Present(value))
    }

    /// A cell whose state is `state`.
    pub fn from_maybe(state: Maybe<T>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(state)),
        }
    }

    /// Stores `state`, present or absent, and yields it back.
    pub fn write_maybe(&self, state: Maybe<T>) -> Action<T> {
        let slot = Rc::clone(&self.slot);
        Action::new(move || {
            slot.replace(state.clone());
            state.clone()
        })
    }

    /// Replaces the stored value with `function` applied to it and yields
    /// the new value. An absent cell is left untouched and its absence is
    /// yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::effect::Mut;
    ///
    /// let cell = Mut::with_value(2);
    /// let double = cell.update(|x| x * 2);
    /// double.invoke();
    /// assert_eq!(double.invoke(), Maybe::Present(8));
    /// ```
    pub fn update<F>(&self, function: F) -> Action<T>
    where
        F: Fn(T) -> T + 'static,
    {
        let slot = Rc::clone(&self.slot);
        Action::new(move || {
            let current = slot.borrow().clone();
            let next = current.map(&function);
            if let Maybe::Present(value) = &next {
                slot.replace(Maybe::Present(value.clone()));
            }
            next
        })
    }

    /// Whether the cell currently holds no value. Always present.
    pub fn is_absent(&self) -> Action<bool> {
        let slot = Rc::clone(&self.slot);
        Action::new(move || Maybe::Present(slot.borrow().is_absent()))
    }

    /// A new cell seeded with the current value. The source keeps its value
    /// and the two cells share nothing afterwards.
    pub fn copy(&self) -> Action<Self> {
        let slot = Rc::clone(&self.slot);
        Action::new(move || {
            let copied = slot.borrow().clone().map(Self::with_value);
            if copied.is_present() {
                tracing::trace!("cell value copied");
            }
            copied
        })
    }

    /// Moves the current value into a new cell and marks this one
    /// [`Reason::Moved`] in the same step.
    ///
    /// Transferring out of an absent cell yields its absence and leaves it
    /// unchanged.
    pub fn transfer(&self) -> Action<Self> {
        let slot = Rc::clone(&self.slot);
        Action::new(move || {
            let mut state = slot.borrow_mut();
            if let Maybe::Absent(reason) = &*state {
                return Maybe::Absent(reason.clone());
            }
            let taken = mem::replace(&mut *state, Maybe::fail(Reason::Moved));
            tracing::trace!("cell value transferred");
            taken.map(Self::with_value)
        })
    }
}

impl<T: Clone + 'static> ReadAction<T> for Mut<T> {
    fn read(&self) -> Action<T> {
        let slot = Rc::clone(&self.slot);
        Action::new(move || slot.borrow().clone())
    }
}

impl<T: Clone + 'static> WriteAction<T> for Mut<T> {
    fn write(&self, value: T) -> Action<T> {
        self.write_maybe(Maybe::Present(value))
    }
}

impl<T: Clone + 'static> Default for Mut<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> From<Option<T>> for Mut<T> {
    fn from(initial: Option<T>) -> Self {
        initial.map_or_else(Self::new, Self::with_value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Mut<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Mut");
        match self.slot.try_borrow() {
            Ok(state) => debug.field("state", &*state),
            Err(_) => debug.field("state", &format_args!("<borrowed>")),
        };
        debug.finish()
    }
}

static_assertions::assert_not_impl_any!(Mut<i32>: Clone, Send, Sync);
