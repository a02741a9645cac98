// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keys the combobox reacts to, and what it asks of the host in return.

use core::fmt;
use core::str::FromStr;

use flyout_items::ParseError;

/// A navigation or commit key.
///
/// Parses from the DOM `KeyboardEvent.key` spelling. Any other key is plain
/// text input and goes through
/// [`SearchController::on_text_input`](crate::SearchController::on_text_input).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Open the dropdown, or highlight the next row.
    ArrowDown,
    /// Highlight the previous row.
    ArrowUp,
    /// Select the highlighted row, or submit free text.
    Enter,
    /// Close and leave the input.
    Escape,
    /// Close and let focus move on.
    Tab,
}

impl Key {
    /// The DOM spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowDown => "ArrowDown",
            Self::ArrowUp => "ArrowUp",
            Self::Enter => "Enter",
            Self::Escape => "Escape",
            Self::Tab => "Tab",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowDown" => Ok(Self::ArrowDown),
            "ArrowUp" => Ok(Self::ArrowUp),
            "Enter" => Ok(Self::Enter),
            "Escape" => Ok(Self::Escape),
            "Tab" => Ok(Self::Tab),
            _ => Err(ParseError::unknown("key", s)),
        }
    }
}

/// A change of input focus the host should apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusRequest {
    /// Move focus into the input.
    Focus,
    /// Remove focus from the input.
    Blur,
}

/// What the host should do with the key event after
/// [`SearchController::on_keyboard`](crate::SearchController::on_keyboard).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// Suppress the event's default action.
    pub prevent_default: bool,
    /// Focus change to apply, if any.
    pub focus: Option<FocusRequest>,
}

impl KeyResponse {
    pub(crate) const IGNORED: Self = Self {
        prevent_default: false,
        focus: None,
    };

    pub(crate) const HANDLED: Self = Self {
        prevent_default: true,
        focus: None,
    };
}
