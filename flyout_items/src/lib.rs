// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout Items: the hierarchical data model shared by Flyout's menu and
//! searchable combobox.
//!
//! A host describes its menu as a forest of [`MenuItem`]s and hands a
//! `&[MenuItem]` to a controller on every call. This crate provides the
//! read-only traversals both controllers need:
//!
//! - [`walk`]: pre-order visit with depth, used to render nested menus.
//! - [`flatten`]: pre-order linearization without disabled items, used for
//!   keyboard highlight arithmetic.
//! - [`filter_recursive`]: pruned copy keeping matches and their ancestors.
//!
//! It also holds the presentation enums ([`Theme`], [`Size`]) that both
//! components accept, and the [`ParseError`] returned when a configuration
//! name is not recognized.
//!
//! ## Minimal example
//!
//! ```rust
//! use flyout_items::{FilterOptions, MenuItem, filter_recursive, flatten};
//!
//! let items = vec![
//!     MenuItem::new("file", "File").with_children([
//!         MenuItem::new("open", "Open"),
//!         MenuItem::new("save", "Save").disabled(),
//!     ]),
//!     MenuItem::new("help", "Help"),
//! ];
//!
//! // Disabled items do not take part in keyboard navigation.
//! let ids: Vec<_> = flatten(&items).iter().map(|e| e.item.id.as_str()).collect();
//! assert_eq!(ids, ["file", "open", "help"]);
//!
//! // "File" survives as the ancestor of the only match.
//! let hits = filter_recursive(&items, "open", &FilterOptions::default());
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].children.len(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`MenuItem`], [`Icon`],
//!   [`SearchKey`], [`Theme`] and [`Size`], so menus can be loaded from
//!   configuration files. [`MenuItem::on_click`] is skipped.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod item;
mod presentation;
mod tree;

pub use error::ParseError;
pub use item::{Action, DEFAULT_SEARCH_KEYS, Icon, MenuItem, SearchKey};
pub use presentation::{Size, Theme};
pub use tree::{FilterOptions, FlatEntry, Matcher, Walk, filter_recursive, find, flatten, walk};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn menus_load_from_toml() {
        let src = r#"
            [[items]]
            id = "file"
            label = "File"
            icon = "F"

              [[items.children]]
              id = "open"
              label = "Open"
              link = "/open"

              [[items.children]]
              id = "save"
              label = "Save"
              disabled = true

            [[items]]
            id = "help"
            label = "Help"
            icon = 42
            className = "muted"
        "#;

        #[derive(serde::Deserialize)]
        struct Doc {
            items: alloc::vec::Vec<MenuItem>,
        }

        let doc: Doc = toml::from_str(src).expect("valid menu");
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[0].icon, Some(Icon::Text("F".into())));
        assert_eq!(doc.items[0].children[0].href(), Some("/open"));
        assert!(doc.items[0].children[1].disabled, "flag carried over");
        assert_eq!(doc.items[1].icon, Some(Icon::Handle(42)));
        assert_eq!(doc.items[1].class_name.as_deref(), Some("muted"));
    }

    #[test]
    fn presentation_names_use_kebab_case() {
        #[derive(serde::Deserialize)]
        struct Doc {
            size: Size,
            theme: Theme,
            keys: alloc::vec::Vec<SearchKey>,
        }

        let doc: Doc =
            toml::from_str("size = \"2xl\"\ntheme = \"dark\"\nkeys = [\"label\", \"className\"]")
                .expect("valid names");
        assert_eq!(doc.size, Size::Xxl);
        assert_eq!(doc.theme, Theme::Dark);
        assert_eq!(doc.keys, [SearchKey::Label, SearchKey::ClassName]);
    }
}
