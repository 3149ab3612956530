//! Text emphasis for terminal output.
//!
//! Message text is built independently of how it will be styled. Callers
//! pass an [`Emphasize`] implementation and the message builders wrap the
//! highlighted substrings with it.

use crossterm::style::{Color, Stylize, style};

/// Capability that decorates a substring for display.
pub trait Emphasize {
    /// Return `text` wrapped in whatever styling this implementation applies.
    fn emphasize(&self, text: &str) -> String;
}

/// Built-in emphasis styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emphasis {
    /// Leave text untouched.
    #[default]
    Plain,
    /// Green foreground ANSI escape sequence.
    Green,
}

impl Emphasis {
    /// Pick the green style when color output is enabled, plain otherwise.
    #[must_use]
    pub const fn for_color(enabled: bool) -> Self {
        if enabled { Self::Green } else { Self::Plain }
    }
}

impl Emphasize for Emphasis {
    fn emphasize(&self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            Self::Green => style(text).with(Color::Green).to_string(),
        }
    }
}
