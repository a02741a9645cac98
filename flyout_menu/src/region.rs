// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The screen areas that count as "inside" the menu.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Host-reported bounds of the trigger and of every visible panel.
///
/// All rectangles must share one coordinate space, the same one pointer
/// positions are reported in. Panels include the root panel and each open
/// submenu panel, since submenus are usually offset outside their parent.
#[derive(Clone, Debug, Default)]
pub struct Regions {
    trigger: Option<Rect>,
    panels: SmallVec<[Rect; 4]>,
}

impl Regions {
    /// Replace the trigger bounds.
    pub fn set_trigger(&mut self, trigger: Option<Rect>) {
        self.trigger = trigger;
    }

    /// Replace the panel bounds.
    pub fn set_panels(&mut self, panels: impl IntoIterator<Item = Rect>) {
        self.panels.clear();
        self.panels.extend(panels);
    }

    /// Forget the panels, keeping the trigger.
    pub fn clear_panels(&mut self) {
        self.panels.clear();
    }

    /// The trigger bounds.
    pub fn trigger(&self) -> Option<Rect> {
        self.trigger
    }

    /// The panel bounds.
    pub fn panels(&self) -> &[Rect] {
        &self.panels
    }

    /// Whether `point` lies on the trigger or on any panel.
    pub fn contains(&self, point: Point) -> bool {
        self.trigger.is_some_and(|r| r.contains(point))
            || self.panels.iter().any(|r| r.contains(point))
    }
}
