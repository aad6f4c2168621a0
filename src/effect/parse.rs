//! Conversions from text-producing actions.
//!
//! Each helper wraps an `Action<String>` so that the produced text is
//! parsed when the action runs. Malformed text becomes
//! [`Reason::Parse`] instead of a panic.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use crate::control::{Maybe, Reason};

use super::Action;

impl Action<String> {
    /// Parses the produced text as `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Maybe;
    /// use funkit::effect::Action;
    ///
    /// let number = Action::pure("42".to_string()).parse::<u8>();
    /// assert_eq!(number.invoke(), Maybe::Present(42));
    ///
    /// let bad = Action::pure("4x".to_string()).parse::<u8>();
    /// assert!(bad.invoke().is_absent());
    /// ```
    pub fn parse<U>(self) -> Action<U>
    where
        U: FromStr + 'static,
        U::Err: Display,
    {
        self.map_maybe(|text| parse_text::<U>(&text))
    }

    /// Parses the produced text as an `i32`.
    pub fn to_i32(self) -> Action<i32> {
        self.parse()
    }

    /// Parses the produced text as an `i64`.
    pub fn to_i64(self) -> Action<i64> {
        self.parse()
    }

    /// Parses the produced text as an `f32`.
    pub fn to_f32(self) -> Action<f32> {
        self.parse()
    }

    /// Parses the produced text as an `f64`.
    pub fn to_f64(self) -> Action<f64> {
        self.parse()
    }

    /// Takes the first character of the produced text. Empty text is a
    /// parse failure.
    pub fn to_char(self) -> Action<char> {
        self.map_maybe(|text| {
            text.chars().next().map_or_else(
                || {
                    Maybe::fail(Reason::Parse {
                        input: text.clone(),
                        target: "char",
                        message: "input is empty".to_string(),
                    })
                },
                Maybe::Present,
            )
        })
    }
}

fn parse_text<U>(text: &str) -> Maybe<U>
where
    U: FromStr,
    U::Err: Display,
{
    match text.parse::<U>() {
        Ok(value) => Maybe::Present(value),
        Err(error) => Maybe::fail(Reason::Parse {
            input: text.to_string(),
            target: type_name::<U>(),
            message: error.to_string(),
        }),
    }
}
