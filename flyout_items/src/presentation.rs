// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation options shared by the menu and the searchable combobox.
//!
//! These never change controller behavior; they are carried through so a
//! renderer can read them back from the same configuration object.

use core::fmt;
use core::str::FromStr;

use crate::ParseError;

/// Color scheme hint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Theme {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
    /// Follow the platform preference.
    #[default]
    Auto,
}

impl Theme {
    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            _ => Err(ParseError::unknown("theme", s)),
        }
    }
}

/// Font and spacing scale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Size {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
    /// Double extra large.
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Size {
    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xs" => Ok(Self::Xs),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "2xl" => Ok(Self::Xxl),
            _ => Err(ParseError::unknown("size", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_round_trip_through_from_str() {
        for size in [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl, Size::Xxl] {
            assert_eq!(size.name().parse::<Size>(), Ok(size));
        }
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    }

    #[test]
    fn unknown_names_report_their_kind() {
        let err = "huge".parse::<Size>().unwrap_err();
        assert_eq!(err.to_string(), "unknown size `huge`");
        assert_eq!(err, ParseError::unknown("size", "huge"));
    }

    #[test]
    fn defaults_match_component_defaults() {
        assert_eq!(Theme::default(), Theme::Auto);
        assert_eq!(Size::default(), Size::Md);
    }
}
