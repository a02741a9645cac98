// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Menu: a headless dropdown/flyout menu controller.
//!
//! [`MenuController`] owns the interaction state of one mounted menu: whether
//! the root panel is open, which nested submenus are expanded, which item the
//! pointer is over, and the pending submenu close timers. It knows nothing
//! about rendering. A host forwards input events into it, calls
//! [`MenuController::tick`] when [`MenuController::next_deadline`] passes, and
//! draws from [`MenuController::rows`].
//!
//! ## Behavior
//!
//! - Activating a leaf runs its [`on_click`](flyout_items::MenuItem::on_click),
//!   then [`MenuHost::item_click`], then closes the whole menu when
//!   [`MenuConfig::close_on_click`] is set.
//! - Activating a parent toggles its submenu and never reaches the host.
//! - Hover opens a submenu at once and closes it after
//!   [`MenuConfig::hover_delay`]; entering the submenu panel cancels the close.
//!   The [`MenuVariant::Sidebar`] variant ignores hover entirely.
//! - A press outside the trigger and every panel closes the menu, but only
//!   [`OUTSIDE_PRESS_ARM_DELAY`] after it opened.
//! - Disabled items, and a disabled menu, ignore everything.
//!
//! ## Minimal example
//!
//! ```rust
//! use flyout_menu::{MenuConfig, MenuController, MenuHost, MenuItem};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl MenuHost for Log {
//!     fn item_click(&mut self, item: &MenuItem) {
//!         self.0.push(item.id.clone());
//!     }
//! }
//!
//! let items = vec![
//!     MenuItem::new("file", "File").with_children([MenuItem::new("open", "Open")]),
//!     MenuItem::new("quit", "Quit"),
//! ];
//! let mut menu = MenuController::new(MenuConfig::default());
//! let mut log = Log::default();
//!
//! menu.toggle_root(0, &mut log);
//! menu.handle_item_hover_enter(&items[0], &mut log);
//! assert!(menu.is_submenu_open("file"));
//!
//! // Leaving starts the close timer; the host ticks once it is due.
//! menu.handle_item_hover_leave(&items[0], 10, &mut log);
//! let due = menu.next_deadline().unwrap();
//! assert_eq!(menu.tick(due).as_slice(), ["file"]);
//!
//! menu.handle_item_activate(&items[1], &mut log);
//! assert_eq!(log.0, ["quit"]);
//! assert!(!menu.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` for `kurbo`.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`MenuConfig`] and its
//!   enums, and for the item model.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod host;
mod region;
mod view;

pub use config::{DEFAULT_HOVER_DELAY, MenuConfig, MenuVariant, Placement, TriggerKind};
pub use controller::{Activation, MenuController, OUTSIDE_PRESS_ARM_DELAY};
pub use host::MenuHost;
pub use region::Regions;
pub use view::{ItemFlags, MenuRow};

pub use flyout_items::{Icon, MenuItem, Size, Theme};
pub use flyout_timer::Millis;
