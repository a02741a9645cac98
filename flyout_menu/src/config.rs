// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

use core::fmt;
use core::str::FromStr;

use flyout_items::{ParseError, Size, Theme};
use flyout_timer::Millis;

/// Hover delay applied before a submenu closes, in milliseconds.
pub const DEFAULT_HOVER_DELAY: Millis = 150;

/// Menu style.
///
/// Only [`MenuVariant::Sidebar`] changes behavior: sidebar submenus ignore
/// hover and open or close on click only, and leaving a sidebar submenu panel
/// closes it without delay. The other variants are presentation only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum MenuVariant {
    /// Standard dropdown.
    #[default]
    Default,
    /// Borderless dropdown.
    Minimal,
    /// Horizontal navigation bar entry.
    Navbar,
    /// Vertical, accordion-style navigation.
    Sidebar,
}

impl MenuVariant {
    /// Whether pointer hover opens submenus and delays their closing.
    pub const fn hover_driven(self) -> bool {
        !matches!(self, Self::Sidebar)
    }

    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Navbar => "navbar",
            Self::Sidebar => "sidebar",
        }
    }
}

impl fmt::Display for MenuVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MenuVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "minimal" => Ok(Self::Minimal),
            "navbar" => Ok(Self::Navbar),
            "sidebar" => Ok(Self::Sidebar),
            _ => Err(ParseError::unknown("menu variant", s)),
        }
    }
}

/// Where the panel sits relative to its trigger. Presentation only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Placement {
    /// Centered below.
    Bottom,
    /// Below, aligned to the start edge.
    #[default]
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
    /// Centered above.
    Top,
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// To the right.
    Right,
    /// To the left.
    Left,
}

impl Placement {
    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom" => Ok(Self::Bottom),
            "bottom-start" => Ok(Self::BottomStart),
            "bottom-end" => Ok(Self::BottomEnd),
            "top" => Ok(Self::Top),
            "top-start" => Ok(Self::TopStart),
            "top-end" => Ok(Self::TopEnd),
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(ParseError::unknown("placement", s)),
        }
    }
}

/// Which element toggles the menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum TriggerKind {
    /// The built-in "Menu" button.
    #[default]
    Button,
    /// A host-supplied element wrapped in a clickable container.
    Custom,
}

impl TriggerKind {
    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TriggerKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(Self::Button),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseError::unknown("trigger", s)),
        }
    }
}

/// Options for a [`MenuController`](crate::MenuController).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct MenuConfig {
    /// Color scheme hint.
    pub theme: Theme,
    /// Menu style; see [`MenuVariant`].
    pub variant: MenuVariant,
    /// Font and spacing scale.
    pub size: Size,
    /// Panel placement.
    pub placement: Placement,
    /// Trigger element.
    pub trigger: TriggerKind,
    /// Whether activating a leaf closes the whole menu.
    pub close_on_click: bool,
    /// Delay before a hover-opened submenu closes, in milliseconds.
    pub hover_delay: Millis,
    /// Globally inert: the trigger does nothing.
    pub disabled: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            variant: MenuVariant::Default,
            size: Size::Md,
            placement: Placement::BottomStart,
            trigger: TriggerKind::Button,
            close_on_click: true,
            hover_delay: DEFAULT_HOVER_DELAY,
            disabled: false,
        }
    }
}

impl MenuConfig {
    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: MenuVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Use a host-supplied trigger element.
    #[must_use]
    pub fn with_custom_trigger(mut self) -> Self {
        self.trigger = TriggerKind::Custom;
        self
    }

    /// Set whether leaf activation closes the menu.
    #[must_use]
    pub fn with_close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = close_on_click;
        self
    }

    /// Set the submenu close delay.
    #[must_use]
    pub fn with_hover_delay(mut self, hover_delay: Millis) -> Self {
        self.hover_delay = hover_delay;
        self
    }

    /// Set the global disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults() {
        let config = MenuConfig::default();
        assert!(config.close_on_click, "leaf clicks close by default");
        assert_eq!(config.hover_delay, 150);
        assert_eq!(config.placement, Placement::BottomStart);
        assert_eq!(config.trigger, TriggerKind::Button);
    }

    #[test]
    fn only_sidebar_ignores_hover() {
        assert!(MenuVariant::Navbar.hover_driven(), "navbar follows hover");
        assert!(!MenuVariant::Sidebar.hover_driven(), "sidebar is click driven");
    }

    #[test]
    fn placement_names() {
        assert_eq!("top-end".parse::<Placement>(), Ok(Placement::TopEnd));
        assert_eq!(Placement::BottomStart.to_string(), "bottom-start");
        assert_eq!(
            "diagonal".parse::<Placement>().unwrap_err().to_string(),
            "unknown placement `diagonal`"
        );
    }

    #[test]
    fn trigger_names() {
        assert_eq!("custom".parse::<TriggerKind>(), Ok(TriggerKind::Custom));
        assert_eq!(TriggerKind::Button.to_string(), "button");
        assert_eq!(
            "link".parse::<TriggerKind>().unwrap_err().to_string(),
            "unknown trigger `link`"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_toml() {
        let config: MenuConfig = toml::from_str(
            "variant = \"sidebar\"\nplacement = \"right\"\nsize = \"2xl\"\nhoverDelay = 300\ncloseOnClick = false",
        )
        .expect("valid config");

        assert_eq!(
            config,
            MenuConfig::default()
                .with_variant(MenuVariant::Sidebar)
                .with_placement(Placement::Right)
                .with_size(Size::Xxl)
                .with_hover_delay(300)
                .with_close_on_click(false)
        );
    }
}
