// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu state machine.
//!
//! ## States
//!
//! The root panel is open or closed. While open, any subset of parent items
//! may have their submenu expanded, and at most one item is "hovering".
//!
//! ## Submenu timing
//!
//! Opening is immediate, closing is delayed. Entering a parent item opens its
//! submenu at once; leaving it starts a close timer of
//! [`MenuConfig::hover_delay`]. Entering either the parent again or the
//! submenu panel cancels that timer, so the pointer can cross the gap between
//! an item and its offset flyout. The sidebar variant is click driven: hover
//! never opens anything, and leaving a sidebar panel closes it at once.
//!
//! ## Full close
//!
//! Leaf activation (with `close_on_click`), an outside press, toggling the
//! root closed, and [`MenuController::unmount`] all end in the same state:
//! root closed, no submenus, nothing hovering, no pending timers.

use alloc::string::String;

use flyout_items::{MenuItem, Size};
use flyout_timer::{Millis, TimerSet};
use hashbrown::HashSet;
use kurbo::{Point, Rect};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{MenuConfig, MenuHost, Regions};

/// How long after opening before an outside press can dismiss the menu.
///
/// The press that opened the menu must not also close it.
pub const OUTSIDE_PRESS_ARM_DELAY: Millis = 50;

/// What [`MenuController::handle_item_activate`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The item is disabled; nothing happened.
    Ignored,
    /// The item is a parent; its submenu is now `open` or closed.
    SubmenuToggled {
        /// New expansion state.
        open: bool,
    },
    /// The item is a leaf; callbacks ran and the menu `closed` or stayed open.
    Activated {
        /// Whether the activation closed the whole menu.
        closed: bool,
    },
}

impl Activation {
    /// Whether the host should suppress the input event's default action.
    ///
    /// Only leaf activations let the default through, so a leaf rendered as
    /// a link still navigates.
    pub fn prevent_default(self) -> bool {
        !matches!(self, Self::Activated { .. })
    }
}

/// Headless controller for one mounted dropdown/flyout menu.
///
/// The host owns the item tree and passes it to each call; the controller
/// keeps only ids. Time is supplied by the host as milliseconds on any
/// monotonic clock, and due timers fire from [`MenuController::tick`].
#[derive(Debug)]
pub struct MenuController {
    config: MenuConfig,
    is_open: bool,
    open_submenus: HashSet<String>,
    hovering: Option<String>,
    close_timers: TimerSet<String>,
    // Outside presses are honored from this instant on.
    armed_at: Option<Millis>,
    regions: Regions,
    reported_hover: Option<bool>,
}

impl MenuController {
    /// Create a closed menu.
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            is_open: false,
            open_submenus: HashSet::new(),
            hovering: None,
            close_timers: TimerSet::new(),
            armed_at: None,
            regions: Regions::default(),
            reported_hover: None,
        }
    }

    /// Report the initial observable state to the host.
    ///
    /// Calls [`MenuHost::hover_change`] and [`MenuHost::font_size_change`]
    /// once each.
    pub fn mount(&mut self, host: &mut impl MenuHost) {
        self.reported_hover = None;
        self.sync_hover(host);
        host.font_size_change(self.config.size);
    }

    /// Tear down: cancel every timer, forget the registered regions, and
    /// reset to closed.
    ///
    /// After this, [`MenuController::tick`] has nothing left to fire. A host
    /// that mounts the menu again registers its regions again.
    pub fn unmount(&mut self) {
        let cancelled = self.close_timers.clear();
        self.is_open = false;
        self.open_submenus.clear();
        self.hovering = None;
        self.armed_at = None;
        self.regions = Regions::default();
        debug!(cancelled, "menu unmounted");
    }

    /// The active configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Replace the configuration, as when the host re-renders with new
    /// options. Reports a size change to the host.
    ///
    /// Pending timers keep their deadlines; the new delay applies to the
    /// next one scheduled.
    pub fn set_config(&mut self, config: MenuConfig, host: &mut impl MenuHost) {
        let size_changed = config.size != self.config.size;
        self.config = config;
        if size_changed {
            host.font_size_change(self.config.size);
        }
    }

    /// Change only the size.
    pub fn set_size(&mut self, size: Size, host: &mut impl MenuHost) {
        let config = MenuConfig {
            size,
            ..self.config.clone()
        };
        self.set_config(config, host);
    }

    /// Whether the root panel is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the submenu under `id` is expanded.
    pub fn is_submenu_open(&self, id: &str) -> bool {
        self.open_submenus.contains(id)
    }

    /// Ids of every expanded submenu, in no particular order.
    pub fn open_submenus(&self) -> impl Iterator<Item = &str> {
        self.open_submenus.iter().map(String::as_str)
    }

    /// The hovering item's id.
    pub fn hovering(&self) -> Option<&str> {
        self.hovering.as_deref()
    }

    /// Whether a close timer is pending for `id`.
    pub fn is_close_pending(&self, id: &str) -> bool {
        self.close_timers.is_pending(id)
    }

    /// Number of pending submenu close timers.
    pub fn pending_timers(&self) -> usize {
        self.close_timers.len()
    }

    /// When the host should next call [`MenuController::tick`].
    pub fn next_deadline(&self) -> Option<Millis> {
        self.close_timers.next_deadline()
    }

    /// Report the trigger's bounds for outside-press detection.
    pub fn set_trigger_region(&mut self, bounds: Option<Rect>) {
        self.regions.set_trigger(bounds);
    }

    /// Report the bounds of the root panel and each visible submenu panel.
    ///
    /// The bounds persist across closing and reopening; send them again
    /// only when the layout changes.
    pub fn set_panel_regions(&mut self, panels: impl IntoIterator<Item = Rect>) {
        self.regions.set_panels(panels);
    }

    /// The registered regions.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Flip the root panel. Does nothing while the menu is disabled.
    ///
    /// Returns the resulting open state.
    pub fn toggle_root(&mut self, now: Millis, host: &mut impl MenuHost) -> bool {
        if self.config.disabled {
            trace!("toggle ignored: menu disabled");
            return self.is_open;
        }
        if self.is_open {
            self.close(host);
        } else {
            self.is_open = true;
            self.armed_at = Some(now.saturating_add(OUTSIDE_PRESS_ARM_DELAY));
            debug!(now, "menu opened");
        }
        self.is_open
    }

    /// Full close: root closed, submenus collapsed, hover cleared, timers
    /// cancelled.
    pub fn close(&mut self, host: &mut impl MenuHost) {
        let cancelled = self.close_timers.clear();
        self.is_open = false;
        self.open_submenus.clear();
        self.hovering = None;
        self.armed_at = None;
        debug!(cancelled, "menu closed");
        self.sync_hover(host);
    }

    /// Click or press on an item.
    ///
    /// - Disabled: nothing.
    /// - Parent: toggle its submenu and mark it hovering. The root stays open
    ///   and [`MenuHost::item_click`] is not called.
    /// - Leaf: run [`MenuItem::on_click`], then [`MenuHost::item_click`], then
    ///   close fully if [`MenuConfig::close_on_click`] is set.
    pub fn handle_item_activate(
        &mut self,
        item: &MenuItem,
        host: &mut impl MenuHost,
    ) -> Activation {
        if item.disabled {
            trace!(id = %item.id, "activation ignored: item disabled");
            return Activation::Ignored;
        }

        if item.has_children() {
            self.close_timers.cancel(item.id.as_str());
            let open = if self.open_submenus.remove(item.id.as_str()) {
                false
            } else {
                self.open_submenus.insert(item.id.clone());
                true
            };
            self.hovering = Some(item.id.clone());
            self.sync_hover(host);
            debug!(id = %item.id, open, "submenu toggled");
            return Activation::SubmenuToggled { open };
        }

        if let Some(action) = &item.on_click {
            action.invoke();
        }
        host.item_click(item);
        debug!(id = %item.id, "item activated");

        let closed = self.config.close_on_click;
        if closed {
            self.close(host);
        }
        Activation::Activated { closed }
    }

    /// The pointer entered an item.
    ///
    /// Hover-driven variants open a parent's submenu immediately.
    pub fn handle_item_hover_enter(&mut self, item: &MenuItem, host: &mut impl MenuHost) {
        if item.disabled {
            return;
        }
        self.hovering = Some(item.id.clone());
        if item.has_children() && self.config.variant.hover_driven() {
            self.open_now(&item.id);
        }
        self.sync_hover(host);
    }

    /// The pointer left an item.
    ///
    /// Hover-driven variants schedule the parent's submenu to close after
    /// the hover delay.
    pub fn handle_item_hover_leave(
        &mut self,
        item: &MenuItem,
        now: Millis,
        host: &mut impl MenuHost,
    ) {
        if item.disabled {
            return;
        }
        if self.hovering.as_deref() == Some(item.id.as_str()) {
            self.hovering = None;
        }
        if item.has_children() && self.config.variant.hover_driven() {
            self.schedule_close(&item.id, now);
        }
        self.sync_hover(host);
    }

    /// The pointer entered the submenu panel belonging to `id`.
    ///
    /// Cancels any pending close for it and keeps it open.
    pub fn handle_submenu_hover_enter(&mut self, id: &str, host: &mut impl MenuHost) {
        self.open_now(id);
        self.hovering = Some(id.into());
        self.sync_hover(host);
    }

    /// The pointer left the submenu panel belonging to `id`.
    ///
    /// Hover-driven variants schedule a delayed close; the sidebar closes it
    /// immediately.
    pub fn handle_submenu_hover_leave(&mut self, id: &str, now: Millis) {
        if self.config.variant.hover_driven() {
            self.schedule_close(id, now);
        } else {
            self.close_timers.cancel(id);
            if self.open_submenus.remove(id) {
                debug!(id, "sidebar submenu closed");
            }
        }
    }

    /// A pointer press at `point`, in the coordinate space of the
    /// registered regions.
    ///
    /// If the menu is open, armed, and `point` is outside the trigger and
    /// every panel, the menu closes fully. Returns whether it closed.
    pub fn handle_outside_interaction(
        &mut self,
        point: Point,
        now: Millis,
        host: &mut impl MenuHost,
    ) -> bool {
        let inside = self.regions.contains(point);
        self.handle_outside_target(inside, now, host)
    }

    /// Like [`MenuController::handle_outside_interaction`] for hosts that
    /// hit-test on their own and only know whether the press landed inside
    /// the trigger or a panel.
    pub fn handle_outside_target(
        &mut self,
        inside: bool,
        now: Millis,
        host: &mut impl MenuHost,
    ) -> bool {
        if !self.is_open || inside {
            return false;
        }
        if self.armed_at.is_none_or(|armed| now < armed) {
            trace!(now, "outside press ignored: not armed yet");
            return false;
        }
        debug!(now, "outside press");
        self.close(host);
        true
    }

    /// Fire every close timer due at `now`. Returns the ids that closed.
    pub fn tick(&mut self, now: Millis) -> SmallVec<[String; 4]> {
        let due = self.close_timers.drain_due(now);
        for id in &due {
            self.open_submenus.remove(id.as_str());
            trace!(id = %id, now, "submenu close timer fired");
        }
        due
    }

    fn open_now(&mut self, id: &str) {
        self.close_timers.cancel(id);
        if !self.open_submenus.contains(id) {
            self.open_submenus.insert(id.into());
            trace!(id, "submenu opened");
        }
    }

    fn schedule_close(&mut self, id: &str, now: Millis) {
        let delay = self.config.hover_delay;
        self.close_timers.schedule(id.into(), now, delay);
        trace!(id, now, delay, "submenu close scheduled");
    }

    fn sync_hover(&mut self, host: &mut impl MenuHost) {
        let hovering = self.hovering.is_some();
        if self.reported_hover != Some(hovering) {
            self.reported_hover = Some(hovering);
            host.hover_change(hovering);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuVariant;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        clicked: Vec<String>,
        hover: Vec<bool>,
        sizes: Vec<Size>,
    }

    impl MenuHost for Recorder {
        fn item_click(&mut self, item: &MenuItem) {
            self.clicked.push(item.id.clone());
        }

        fn hover_change(&mut self, hovering: bool) {
            self.hover.push(hovering);
        }

        fn font_size_change(&mut self, size: Size) {
            self.sizes.push(size);
        }
    }

    fn tools() -> MenuItem {
        MenuItem::new("tools", "Tools").with_children([
            MenuItem::new("lint", "Lint"),
            MenuItem::new("fmt", "Format"),
        ])
    }

    fn open_menu(config: MenuConfig) -> MenuController {
        let mut menu = MenuController::new(config);
        menu.toggle_root(0, &mut ());
        menu
    }

    #[test]
    fn toggle_root_flips_unless_disabled() {
        let mut menu = MenuController::new(MenuConfig::default());
        assert!(menu.toggle_root(0, &mut ()), "opens");
        assert!(!menu.toggle_root(10, &mut ()), "closes");

        let mut disabled = MenuController::new(MenuConfig::default().with_disabled(true));
        assert!(!disabled.toggle_root(0, &mut ()), "disabled stays closed");
    }

    #[test]
    fn leaf_activation_runs_item_then_host_and_closes() {
        let ran = Rc::new(Cell::new(0_u8));
        let counter = ran.clone();
        let leaf =
            MenuItem::new("lint", "Lint").with_on_click(move || counter.set(counter.get() + 1));

        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();
        menu.handle_item_activate(&tools(), &mut host);
        menu.handle_item_hover_leave(&tools(), 5, &mut host);

        let outcome = menu.handle_item_activate(&leaf, &mut host);

        assert_eq!(outcome, Activation::Activated { closed: true });
        assert!(!outcome.prevent_default(), "leaf keeps its default action");
        assert_eq!(ran.get(), 1);
        assert_eq!(host.clicked, ["lint"]);
        assert!(!menu.is_open(), "root closed");
        assert_eq!(menu.open_submenus().count(), 0);
        assert_eq!(menu.hovering(), None);
        assert_eq!(menu.pending_timers(), 0);
    }

    #[test]
    fn leaf_activation_without_close_on_click_keeps_state() {
        let mut menu = open_menu(MenuConfig::default().with_close_on_click(false));
        let mut host = Recorder::default();
        let leaf = MenuItem::new("a", "A");

        assert_eq!(
            menu.handle_item_activate(&leaf, &mut host),
            Activation::Activated { closed: false }
        );
        menu.handle_item_activate(&leaf, &mut host);

        assert!(menu.is_open(), "still open");
        assert_eq!(host.clicked, ["a", "a"], "no de-duplication");
    }

    #[test]
    fn disabled_items_are_inert() {
        let hits = Rc::new(Cell::new(0_u32));
        let counter = hits.clone();
        let item = MenuItem::new("x", "X")
            .disabled()
            .with_on_click(move || counter.set(counter.get() + 1));
        let parent = tools().disabled();

        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();

        let outcome = menu.handle_item_activate(&item, &mut host);
        assert_eq!(outcome, Activation::Ignored);
        assert!(outcome.prevent_default(), "default suppressed");
        assert_eq!(menu.handle_item_activate(&parent, &mut host), Activation::Ignored);
        menu.handle_item_hover_enter(&parent, &mut host);

        assert_eq!(hits.get(), 0);
        assert!(host.clicked.is_empty(), "host not notified");
        assert!(!menu.is_submenu_open("tools"), "hover does not open disabled parents");
        assert_eq!(menu.hovering(), None);
        assert!(menu.is_open(), "root untouched");
    }

    #[test]
    fn parent_activation_toggles_without_notifying_host() {
        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();

        let outcome = menu.handle_item_activate(&tools(), &mut host);
        assert_eq!(outcome, Activation::SubmenuToggled { open: true });
        assert!(outcome.prevent_default(), "parents suppress default");
        assert!(menu.is_submenu_open("tools"));
        assert_eq!(menu.hovering(), Some("tools"));

        assert_eq!(
            menu.handle_item_activate(&tools(), &mut host),
            Activation::SubmenuToggled { open: false }
        );
        assert!(menu.is_open(), "root stays open");
        assert!(host.clicked.is_empty(), "parents never reach item_click");
    }

    #[test]
    fn hover_opens_immediately_and_closes_after_delay() {
        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();

        menu.handle_item_hover_enter(&tools(), &mut host);
        assert!(menu.is_submenu_open("tools"), "opens with no delay");

        menu.handle_item_hover_leave(&tools(), 1_000, &mut host);
        assert_eq!(menu.next_deadline(), Some(1_150));
        assert!(menu.tick(1_149).is_empty());
        assert!(menu.is_submenu_open("tools"), "still open inside the delay");

        assert_eq!(menu.tick(1_150).as_slice(), ["tools"]);
        assert!(!menu.is_submenu_open("tools"), "closed after the delay");
    }

    #[test]
    fn entering_the_submenu_panel_cancels_the_close() {
        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();

        menu.handle_item_hover_enter(&tools(), &mut host);
        menu.handle_item_hover_leave(&tools(), 1_000, &mut host);
        assert_eq!(menu.hovering(), None);
        menu.handle_submenu_hover_enter("tools", &mut host);

        assert!(!menu.is_close_pending("tools"), "timer cancelled");
        assert!(menu.tick(5_000).is_empty());
        assert!(menu.is_submenu_open("tools"));
        assert_eq!(menu.hovering(), Some("tools"));

        menu.handle_submenu_hover_leave("tools", 6_000);
        assert_eq!(menu.tick(6_150).as_slice(), ["tools"]);
    }

    #[test]
    fn re_entering_the_parent_cancels_the_close() {
        let mut menu = open_menu(MenuConfig::default().with_hover_delay(300));
        let mut host = Recorder::default();

        menu.handle_item_hover_enter(&tools(), &mut host);
        menu.handle_item_hover_leave(&tools(), 0, &mut host);
        menu.handle_item_hover_enter(&tools(), &mut host);

        assert!(menu.tick(1_000).is_empty());
        assert!(menu.is_submenu_open("tools"));
    }

    #[test]
    fn sidebar_ignores_hover_and_closes_immediately() {
        let mut menu = open_menu(MenuConfig::default().with_variant(MenuVariant::Sidebar));
        let mut host = Recorder::default();

        menu.handle_item_hover_enter(&tools(), &mut host);
        assert!(!menu.is_submenu_open("tools"), "hover does not open");
        assert_eq!(menu.hovering(), Some("tools"));

        menu.handle_item_activate(&tools(), &mut host);
        assert!(menu.is_submenu_open("tools"), "click opens");
        menu.handle_item_hover_leave(&tools(), 0, &mut host);
        assert!(menu.is_submenu_open("tools"), "leaving the item keeps it");
        assert_eq!(menu.pending_timers(), 0);

        menu.handle_submenu_hover_leave("tools", 0);
        assert!(!menu.is_submenu_open("tools"), "leaving the panel closes at once");
    }

    #[test]
    fn outside_press_closes_only_once_armed() {
        let mut menu = MenuController::new(MenuConfig::default());
        let mut host = Recorder::default();
        menu.set_trigger_region(Some(Rect::new(0.0, 0.0, 80.0, 24.0)));
        menu.set_panel_regions([Rect::new(0.0, 24.0, 200.0, 300.0)]);

        menu.toggle_root(1_000, &mut host);
        menu.handle_item_hover_enter(&tools(), &mut host);
        menu.handle_item_hover_leave(&tools(), 1_010, &mut host);

        let far = Point::new(600.0, 600.0);
        assert!(
            !menu.handle_outside_interaction(far, 1_049, &mut host),
            "the opening press cannot close"
        );
        assert!(
            !menu.handle_outside_interaction(Point::new(40.0, 100.0), 1_100, &mut host),
            "press inside the panel"
        );
        assert!(
            !menu.handle_outside_interaction(Point::new(10.0, 10.0), 1_100, &mut host),
            "press on the trigger"
        );
        assert!(menu.handle_outside_interaction(far, 1_100, &mut host), "outside");

        assert!(!menu.is_open(), "closed");
        assert_eq!(menu.hovering(), None);
        assert_eq!(menu.pending_timers(), 0, "timers cancelled");
    }

    #[test]
    fn panel_regions_survive_a_close() {
        let mut menu = MenuController::new(MenuConfig::default());
        menu.set_panel_regions([Rect::new(0.0, 24.0, 200.0, 300.0)]);
        menu.toggle_root(0, &mut ());
        menu.toggle_root(100, &mut ());
        menu.toggle_root(200, &mut ());

        assert!(
            !menu.handle_outside_interaction(Point::new(40.0, 100.0), 400, &mut ()),
            "press inside the reopened panel"
        );
        assert!(menu.is_open(), "still open");
        assert_eq!(menu.regions().panels().len(), 1);

        menu.unmount();
        assert!(menu.regions().panels().is_empty(), "teardown forgets layout");
    }

    #[test]
    fn outside_press_on_closed_menu_is_a_no_op() {
        let mut menu = MenuController::new(MenuConfig::default());
        assert!(!menu.handle_outside_target(false, 10_000, &mut ()), "nothing to close");
    }

    #[test]
    fn reopening_rearms_the_outside_listener() {
        let mut menu = MenuController::new(MenuConfig::default());
        menu.toggle_root(0, &mut ());
        menu.toggle_root(100, &mut ());
        menu.toggle_root(200, &mut ());
        assert!(!menu.handle_outside_target(false, 220, &mut ()), "fresh open");
        assert!(menu.handle_outside_target(false, 250, &mut ()), "armed again");
    }

    #[test]
    fn unmount_cancels_pending_timers() {
        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();
        let other = MenuItem::new("view", "View").with_children([MenuItem::new("zoom", "Zoom")]);

        menu.handle_item_hover_enter(&tools(), &mut host);
        menu.handle_item_hover_leave(&tools(), 0, &mut host);
        menu.handle_item_hover_enter(&other, &mut host);
        menu.handle_item_hover_leave(&other, 0, &mut host);
        assert_eq!(menu.pending_timers(), 2);

        menu.unmount();
        assert_eq!(menu.pending_timers(), 0);
        assert_eq!(menu.next_deadline(), None);
        assert!(menu.tick(10_000).is_empty(), "nothing fires after teardown");
        assert!(!menu.is_open(), "reset to closed");
    }

    #[test]
    fn hover_changes_are_reported_on_transitions() {
        let mut menu = open_menu(MenuConfig::default());
        let mut host = Recorder::default();
        menu.mount(&mut host);

        let a = MenuItem::new("a", "A");
        let b = MenuItem::new("b", "B");
        menu.handle_item_hover_enter(&a, &mut host);
        menu.handle_item_hover_enter(&b, &mut host);
        menu.handle_item_hover_leave(&a, 0, &mut host);
        menu.handle_item_hover_leave(&b, 0, &mut host);

        assert_eq!(host.hover, vec![false, true, false]);
        assert_eq!(host.sizes, vec![Size::Md]);
    }

    #[test]
    fn size_changes_are_reported() {
        let mut menu = MenuController::new(MenuConfig::default());
        let mut host = Recorder::default();
        menu.set_size(Size::Lg, &mut host);
        menu.set_size(Size::Lg, &mut host);
        menu.set_config(MenuConfig::default().with_size(Size::Xs), &mut host);
        assert_eq!(host.sizes, vec![Size::Lg, Size::Xs]);
    }
}
