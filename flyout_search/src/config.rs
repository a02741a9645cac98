// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Searchable combobox configuration.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use flyout_items::{DEFAULT_SEARCH_KEYS, FilterOptions, ParseError, SearchKey, Size, Theme};
use flyout_timer::Millis;

/// Quiet window before typed text is committed as the filter, in milliseconds.
pub const DEFAULT_DEBOUNCE: Millis = 300;

/// Input style. Presentation only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SearchVariant {
    /// Bordered input.
    #[default]
    Default,
    /// Underlined input.
    Minimal,
    /// Heavier border.
    Outlined,
    /// Tinted background.
    Filled,
}

impl SearchVariant {
    /// The configuration spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Minimal => "minimal",
            Self::Outlined => "outlined",
            Self::Filled => "filled",
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "minimal" => Ok(Self::Minimal),
            "outlined" => Ok(Self::Outlined),
            "filled" => Ok(Self::Filled),
            _ => Err(ParseError::unknown("search variant", s)),
        }
    }
}

/// Options for a [`SearchController`](crate::SearchController).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SearchConfig {
    /// Color scheme hint.
    pub theme: Theme,
    /// Input style.
    pub variant: SearchVariant,
    /// Font and spacing scale.
    pub size: Size,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Globally inert: typing, keys, and focus do nothing.
    pub disabled: bool,
    /// Whether a clear button is offered while the input holds text.
    pub clearable: bool,
    /// Maximum dropdown height in pixels.
    pub max_height: u32,
    /// Message shown when the filter leaves nothing.
    pub no_results_text: String,
    /// Item fields the query is matched against.
    pub search_keys: Vec<SearchKey>,
    /// Compare case-sensitively.
    pub case_sensitive: bool,
    /// Queries shorter than this, in characters, do not filter.
    pub min_search_length: usize,
    /// Quiet window before typed text becomes the filter.
    pub debounce_ms: Millis,
    /// Whether Enter (or the no-results affordance) may submit free text.
    pub allow_custom_value: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            variant: SearchVariant::Default,
            size: Size::Md,
            placeholder: "Search...".into(),
            disabled: false,
            clearable: true,
            max_height: 300,
            no_results_text: "No results found".into(),
            search_keys: DEFAULT_SEARCH_KEYS.to_vec(),
            case_sensitive: false,
            min_search_length: 0,
            debounce_ms: DEFAULT_DEBOUNCE,
            allow_custom_value: false,
        }
    }
}

impl SearchConfig {
    /// The filter settings derived from this configuration.
    pub fn filter_options(&self) -> FilterOptions<'_> {
        FilterOptions {
            search_keys: &self.search_keys,
            case_sensitive: self.case_sensitive,
            min_search_length: self.min_search_length,
        }
    }

    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: SearchVariant) -> Self {
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

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the global disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the clear button is offered.
    #[must_use]
    pub fn with_clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Set the dropdown height limit.
    #[must_use]
    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the no-results message.
    #[must_use]
    pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    /// Replace the searched fields.
    #[must_use]
    pub fn with_search_keys(mut self, keys: impl IntoIterator<Item = SearchKey>) -> Self {
        self.search_keys = keys.into_iter().collect();
        self
    }

    /// Set case sensitivity.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the minimum query length.
    #[must_use]
    pub fn with_min_search_length(mut self, len: usize) -> Self {
        self.min_search_length = len;
        self
    }

    /// Set the debounce window.
    #[must_use]
    pub fn with_debounce(mut self, debounce_ms: Millis) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Allow free-text submissions.
    #[must_use]
    pub fn with_custom_value(mut self, allow: bool) -> Self {
        self.allow_custom_value = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.placeholder, "Search...");
        assert_eq!(config.no_results_text, "No results found");
        assert_eq!(config.search_keys, [SearchKey::Label, SearchKey::Id]);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.max_height, 300);
        assert!(config.clearable, "clearable by default");
        assert!(!config.allow_custom_value, "free text is opt-in");
    }

    #[test]
    fn variant_names() {
        assert_eq!("filled".parse::<SearchVariant>(), Ok(SearchVariant::Filled));
        assert_eq!(SearchVariant::Outlined.to_string(), "outlined");
        assert!("navbar".parse::<SearchVariant>().is_err(), "menu-only variant");
    }

    #[test]
    fn filter_options_follow_config() {
        let config = SearchConfig::default()
            .with_search_keys([SearchKey::Link])
            .with_case_sensitive(true)
            .with_min_search_length(2);
        let options = config.filter_options();
        assert_eq!(options.search_keys, [SearchKey::Link]);
        assert!(options.case_sensitive, "carried over");
        assert_eq!(options.min_search_length, 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_toml() {
        let config: SearchConfig = toml::from_str(
            r#"
            variant = "outlined"
            searchKeys = ["label", "link"]
            debounceMs = 150
            allowCustomValue = true
            noResultsText = "Nothing here"
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config,
            SearchConfig::default()
                .with_variant(SearchVariant::Outlined)
                .with_search_keys([SearchKey::Label, SearchKey::Link])
                .with_debounce(150)
                .with_custom_value(true)
                .with_no_results_text("Nothing here")
        );
    }
}
