// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render directives for the combobox.
//!
//! These take the tree returned by [`SearchController::filtered`], so a
//! renderer filters once per frame and borrows rows from the result:
//!
//! ```rust
//! use flyout_search::{DropdownView, MenuItem, SearchConfig, SearchController};
//!
//! let items = vec![MenuItem::new("a", "Alpha"), MenuItem::new("b", "Beta")];
//! let mut search = SearchController::new(SearchConfig::default());
//! search.on_focus();
//!
//! let filtered = search.filtered(&items);
//! match search.dropdown(&filtered) {
//!     DropdownView::Rows(rows) => assert_eq!(rows.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use alloc::vec::Vec;

use flyout_items::MenuItem;

use crate::SearchController;

/// One navigable row of the dropdown.
#[derive(Clone, Copy, Debug)]
pub struct SearchRow<'a> {
    /// Position in the flattened list; pass to
    /// [`SearchController::hover_row`].
    pub index: usize,
    /// Nesting level, for indentation.
    pub depth: usize,
    /// The item.
    pub item: &'a MenuItem,
    /// Keyboard or pointer highlight.
    pub highlighted: bool,
    /// Current-selection indicator, from [`MenuItem::active`].
    pub active: bool,
}

/// What the dropdown area shows.
#[derive(Clone, Debug)]
pub enum DropdownView<'a> {
    /// Nothing.
    Closed,
    /// The flattened result list.
    Rows(Vec<SearchRow<'a>>),
    /// The filter left nothing.
    NoResults {
        /// The configured message.
        text: &'a str,
        /// Text for an "Add" affordance, when custom values are allowed and
        /// the input is non-empty. Activating it maps to
        /// [`SearchController::choose_custom_option`].
        custom_option: Option<&'a str>,
    },
}

impl SearchController {
    /// Rows for `filtered`, in keyboard order. Disabled items are omitted.
    pub fn rows<'a>(&self, filtered: &'a [MenuItem]) -> Vec<SearchRow<'a>> {
        let highlighted = self.highlighted();
        self.flattened(filtered)
            .into_iter()
            .enumerate()
            .map(|(index, entry)| SearchRow {
                index,
                depth: entry.depth,
                item: entry.item,
                highlighted: highlighted == Some(index),
                active: entry.item.active,
            })
            .collect()
    }

    /// The dropdown content for `filtered`.
    ///
    /// The no-results panel appears only when the filter kept no item at
    /// all. A result made solely of disabled items renders an empty list.
    pub fn dropdown<'a>(&'a self, filtered: &'a [MenuItem]) -> DropdownView<'a> {
        if !self.is_open() {
            return DropdownView::Closed;
        }
        if !filtered.is_empty() {
            return DropdownView::Rows(self.rows(filtered));
        }
        let custom_option = (self.config().allow_custom_value && !self.text().is_empty())
            .then(|| self.text());
        DropdownView::NoResults {
            text: &self.config().no_results_text,
            custom_option,
        }
    }

    /// Whether the clear button is shown.
    pub fn show_clear_button(&self) -> bool {
        self.config().clearable && !self.text().is_empty()
    }

    /// The input placeholder.
    pub fn placeholder(&self) -> &str {
        &self.config().placeholder
    }

    /// Maximum dropdown height in pixels.
    pub fn max_height(&self) -> u32 {
        self.config().max_height
    }
}
