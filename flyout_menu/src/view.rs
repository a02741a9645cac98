// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render directives: what a renderer needs to draw the current state.

use alloc::vec::Vec;

use flyout_items::MenuItem;

use crate::{MenuController, TriggerKind};

bitflags::bitflags! {
    /// Per-item visual state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Inert item.
        const DISABLED     = 0b0000_0001;
        /// Current-selection indicator.
        const ACTIVE       = 0b0000_0010;
        /// Parent of a submenu.
        const HAS_CHILDREN = 0b0000_0100;
        /// Below the root level.
        const NESTED       = 0b0000_1000;
        /// The hovering item.
        const HOVERING     = 0b0001_0000;
        /// Parent whose submenu is expanded.
        const EXPANDED     = 0b0010_0000;
    }
}

/// One item of the open menu, in pre-order.
#[derive(Clone, Copy, Debug)]
pub struct MenuRow<'a> {
    /// The item.
    pub item: &'a MenuItem,
    /// Nesting level, `0` for the root list.
    pub level: usize,
    /// Visual state.
    pub flags: ItemFlags,
    /// Whether every enclosing submenu is expanded.
    ///
    /// Collapsed submenus are still listed so the renderer can keep their
    /// panels mounted and only toggle visibility.
    pub visible: bool,
}

impl MenuRow<'_> {
    /// The link to render instead of click handling. Leaves only.
    pub fn href(&self) -> Option<&str> {
        self.item.href()
    }

    /// `-1` for disabled items, `0` otherwise.
    pub fn tab_index(&self) -> i8 {
        if self.flags.contains(ItemFlags::DISABLED) {
            -1
        } else {
            0
        }
    }

    /// `aria-expanded`, present on parents only.
    pub fn aria_expanded(&self) -> Option<bool> {
        self.flags
            .contains(ItemFlags::HAS_CHILDREN)
            .then(|| self.flags.contains(ItemFlags::EXPANDED))
    }

    /// `aria-haspopup`, present on parents only.
    pub fn aria_haspopup(&self) -> Option<&'static str> {
        self.flags.contains(ItemFlags::HAS_CHILDREN).then_some("menu")
    }

    /// `aria-disabled`.
    pub fn aria_disabled(&self) -> bool {
        self.flags.contains(ItemFlags::DISABLED)
    }
}

impl MenuController {
    /// The visual state of one item.
    pub fn item_flags(&self, item: &MenuItem, level: usize) -> ItemFlags {
        let mut flags = ItemFlags::empty();
        flags.set(ItemFlags::DISABLED, item.disabled);
        flags.set(ItemFlags::ACTIVE, item.active);
        flags.set(ItemFlags::HAS_CHILDREN, item.has_children());
        flags.set(ItemFlags::NESTED, level > 0);
        flags.set(ItemFlags::HOVERING, self.hovering() == Some(item.id.as_str()));
        flags.set(
            ItemFlags::EXPANDED,
            item.has_children() && self.is_submenu_open(&item.id),
        );
        flags
    }

    /// Rows for the open menu, or nothing while the root is closed.
    pub fn rows<'a>(&self, items: &'a [MenuItem]) -> Vec<MenuRow<'a>> {
        let mut rows = Vec::new();
        if self.is_open() {
            self.push_rows(items, 0, true, &mut rows);
        }
        rows
    }

    fn push_rows<'a>(
        &self,
        items: &'a [MenuItem],
        level: usize,
        visible: bool,
        rows: &mut Vec<MenuRow<'a>>,
    ) {
        for item in items {
            let flags = self.item_flags(item, level);
            rows.push(MenuRow {
                item,
                level,
                flags,
                visible,
            });
            if item.has_children() {
                let expanded = flags.contains(ItemFlags::EXPANDED);
                self.push_rows(&item.children, level + 1, visible && expanded, rows);
            }
        }
    }

    /// Which element acts as the trigger.
    pub fn trigger_kind(&self) -> TriggerKind {
        self.config().trigger
    }

    /// `aria-expanded` on the trigger.
    pub fn trigger_expanded(&self) -> bool {
        self.is_open()
    }

    /// Whether the trigger should render as disabled.
    pub fn trigger_disabled(&self) -> bool {
        self.config().disabled
    }
}
