// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks from the combobox into its host.

use flyout_items::MenuItem;

/// Receives the combobox's notifications.
///
/// Every method has an empty default. Calls happen synchronously inside the
/// controller method that caused them. `()` ignores everything.
pub trait SearchHost {
    /// An item was chosen, or the selection was cleared (`None`).
    fn item_select(&mut self, item: Option<&MenuItem>) {
        let _ = item;
    }

    /// Typed text was committed as the filter after the debounce window.
    fn search_change(&mut self, text: &str) {
        let _ = text;
    }

    /// Free text was submitted. Only called when custom values are allowed.
    fn custom_value(&mut self, text: &str) {
        let _ = text;
    }
}

impl SearchHost for () {}
