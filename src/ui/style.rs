//! Consistent styling for CLI output, using owo-colors.
//!
//! Every helper returns the plain text when color is disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Section headers, e.g. "DeepL can translate from ..."
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Language codes. Pad before styling so alignment survives the escapes.
    pub fn code<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Numbers and other primary values.
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Secondary info such as language names.
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }
}

fn paint<T: Display>(text: T, style: impl FnOnce(&str) -> String) -> String {
    let plain = text.to_string();
    if output::use_color() {
        style(&plain)
    } else {
        plain
    }
}
