//! Combining several actions into one.
//!
//! `combine2`, `combine3` and `sequence` run their operands left to right
//! and stop at the first absent result: later operands are not invoked.
//! `sequence_all` invokes every operand regardless and only then reports the
//! first absence, for callers who want every effect performed.

use crate::control::Maybe;

use super::Action;

/// Runs `first` then `second` and combines both values with `function`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::Maybe;
/// use funkit::effect::{Action, combine2};
///
/// let sum = combine2(Action::pure(10), Action::pure(20), |a, b| a + b);
/// assert_eq!(sum.invoke(), Maybe::Present(30));
/// ```
pub fn combine2<A, B, C, F>(first: Action<A>, second: Action<B>, function: F) -> Action<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + 'static,
{
    Action::new(move || {
        first
            .invoke()
            .chain(|a| second.invoke().map(|b| function(a, b)))
    })
}

/// Runs three actions in order and combines their values with `function`.
pub fn combine3<A, B, C, D, F>(
    first: Action<A>,
    second: Action<B>,
    third: Action<C>,
    function: F,
) -> Action<D>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    F: Fn(A, B, C) -> D + 'static,
{
    Action::new(move || {
        first.invoke().chain(|a| {
            second
                .invoke()
                .chain(|b| third.invoke().map(|c| function(a, b, c)))
        })
    })
}

/// Turns a list of actions into an action producing all their values in
/// order. Stops at the first absence, adopting its reason.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Maybe, Reason};
/// use funkit::effect::{Action, sequence};
///
/// let all = sequence(vec![Action::pure(1), Action::pure(2)]);
/// assert_eq!(all.invoke(), Maybe::Present(vec![1, 2]));
///
/// let broken = sequence(vec![Action::pure(1), Action::fail(Reason::message("x"))]);
/// assert_eq!(broken.invoke(), Maybe::fail(Reason::message("x")));
/// ```
pub fn sequence<T: 'static>(actions: Vec<Action<T>>) -> Action<Vec<T>> {
    Action::new(move || actions.iter().map(Action::invoke).collect())
}

/// Like [`sequence`], but invokes every action before combining, so all
/// effects happen even after an absence. The first absence still decides
/// the result.
pub fn sequence_all<T: 'static>(actions: Vec<Action<T>>) -> Action<Vec<T>> {
    Action::new(move || {
        let results: Vec<Maybe<T>> = actions.iter().map(Action::invoke).collect();
        results.into_iter().collect()
    })
}
