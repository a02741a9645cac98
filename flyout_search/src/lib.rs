// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Search: a headless searchable combobox over a nested item tree.
//!
//! [`SearchController`] keeps the input text, a debounced copy of it that
//! drives filtering, the dropdown's open state, and a keyboard highlight into
//! the flattened results. The host forwards text input, keys, focus, and
//! pointer presses; calls [`SearchController::tick`] once
//! [`SearchController::next_deadline`] passes; and renders from
//! [`SearchController::dropdown`].
//!
//! ## Behavior
//!
//! - Typing restarts a trailing-edge debounce of
//!   [`SearchConfig::debounce_ms`]. Only the committed text filters, and each
//!   commit reaches [`SearchHost::search_change`].
//! - Filtering keeps any item whose [`SearchConfig::search_keys`] contain the
//!   query, with all its children, and keeps the ancestors of deeper matches
//!   with only their matching branches.
//! - `ArrowDown`/`ArrowUp` move through the non-disabled results, wrapping at
//!   both ends. `Enter` selects, or submits free text when
//!   [`SearchConfig::allow_custom_value`] is set.
//! - [`SearchController::sync_selected`] lets the host's own selection
//!   overwrite whatever was typed.
//!
//! ## Minimal example
//!
//! ```rust
//! use flyout_search::{Key, MenuItem, SearchConfig, SearchController, SearchHost};
//!
//! #[derive(Default)]
//! struct Picked(Option<String>);
//!
//! impl SearchHost for Picked {
//!     fn item_select(&mut self, item: Option<&MenuItem>) {
//!         self.0 = item.map(|i| i.id.clone());
//!     }
//! }
//!
//! let items = vec![
//!     MenuItem::new("rust", "Rust"),
//!     MenuItem::new("ruby", "Ruby"),
//!     MenuItem::new("go", "Go"),
//! ];
//! let mut search = SearchController::new(SearchConfig::default());
//! let mut host = Picked::default();
//!
//! search.on_text_input("ru", 0);
//! search.tick(300, &mut host);
//! assert_eq!(search.navigable_len(&items), 2);
//!
//! search.on_keyboard(Key::ArrowDown, &items, 310, &mut host);
//! search.on_keyboard(Key::ArrowDown, &items, 320, &mut host);
//! search.on_keyboard(Key::Enter, &items, 330, &mut host);
//! assert_eq!(search.text(), "Ruby");
//! assert_eq!(host.0.as_deref(), Some("ruby"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`SearchConfig`] and the
//!   item model.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod key;
mod view;

pub use config::{DEFAULT_DEBOUNCE, SearchConfig, SearchVariant};
pub use controller::SearchController;
pub use host::SearchHost;
pub use key::{FocusRequest, Key, KeyResponse};
pub use view::{DropdownView, SearchRow};

pub use flyout_items::{FlatEntry, Icon, MenuItem, SearchKey, Size, Theme};
pub use flyout_timer::Millis;
