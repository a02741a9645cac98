// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

/// Failure to parse a configuration name such as a theme, size, or variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The name is not one of the accepted spellings for `kind`.
    #[error("unknown {kind} `{name}`")]
    UnknownName {
        /// What was being parsed, for example `"theme"`.
        kind: &'static str,
        /// The rejected input.
        name: String,
    },
}

impl ParseError {
    /// Shorthand for [`ParseError::UnknownName`].
    pub fn unknown(kind: &'static str, name: &str) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_string(),
        }
    }
}
