// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callbacks from the menu into its host.

use flyout_items::{MenuItem, Size};

/// Receives the menu's notifications.
///
/// Every method has an empty default, so hosts implement only what they
/// observe. Calls happen synchronously inside the controller method that
/// caused them. A panicking callback unwinds through the controller; there is
/// no recovery.
///
/// `()` is a host that ignores everything.
pub trait MenuHost {
    /// A leaf item was activated. Runs after the item's own
    /// [`on_click`](MenuItem::on_click).
    fn item_click(&mut self, item: &MenuItem) {
        let _ = item;
    }

    /// The menu went from no hovered item to some hovered item, or back.
    fn hover_change(&mut self, hovering: bool) {
        let _ = hovering;
    }

    /// The configured size changed (also reported once on mount).
    fn font_size_change(&mut self, size: Size) {
        let _ = size;
    }
}

impl MenuHost for () {}
