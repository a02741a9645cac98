// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The combobox state machine.
//!
//! Typed text and the filter are deliberately out of step: every change to
//! the input text restarts a [`Debounce`], and only when it fires does the
//! text become the committed query that [`SearchController::filtered`] uses.
//! Keyboard highlight indexes into the flattened committed tree.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use flyout_items::{FlatEntry, MenuItem, filter_recursive, flatten};
use flyout_timer::{Debounce, Millis};
use kurbo::{Point, Rect};
use tracing::{debug, trace};

use crate::{FocusRequest, Key, KeyResponse, SearchConfig, SearchHost};

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

// Wrapping move through `len` rows. A missing or stale origin starts from
// the nearest end.
fn step_highlight(origin: Option<usize>, len: usize, step: Step) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let origin = origin.filter(|&i| i < len);
    Some(match (step, origin) {
        (Step::Forward, Some(i)) => (i + 1) % len,
        (Step::Forward, None) => 0,
        (Step::Backward, Some(0) | None) => len - 1,
        (Step::Backward, Some(i)) => i - 1,
    })
}

/// Headless controller for one searchable combobox.
///
/// Like the menu, it borrows the host's item tree per call and takes the
/// current time from the host. [`SearchController::next_deadline`] reports
/// when the pending debounce is due.
#[derive(Debug)]
pub struct SearchController {
    config: SearchConfig,
    text: String,
    query: String,
    debounce: Debounce<String>,
    highlighted: Option<usize>,
    is_open: bool,
    container: Option<Rect>,
    // `None` until the host first reports its selection.
    selected: Option<Option<String>>,
}

impl SearchController {
    /// Create a closed, empty combobox.
    pub fn new(config: SearchConfig) -> Self {
        let debounce = Debounce::new(config.debounce_ms);
        Self {
            config,
            text: String::new(),
            query: String::new(),
            debounce,
            highlighted: None,
            is_open: false,
            container: None,
            selected: None,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// When the debounce window changes, a pending commit restarts at `now`
    /// with the new window.
    pub fn set_config(&mut self, config: SearchConfig, now: Millis) {
        if config.debounce_ms != self.debounce.delay() {
            self.debounce.set_delay(config.debounce_ms);
            self.debounce.restart(now);
        }
        self.config = config;
    }

    /// The input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The committed query the filter uses.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Index of the highlighted row in the flattened list.
    ///
    /// This is also the row a renderer should scroll into view.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// When the host should next call [`SearchController::tick`].
    pub fn next_deadline(&self) -> Option<Millis> {
        self.debounce.deadline()
    }

    /// Report the bounds of the whole component for outside-press detection.
    pub fn set_container_region(&mut self, bounds: Option<Rect>) {
        self.container = bounds;
    }

    /// `items` filtered by the committed query.
    ///
    /// Borrows `items` unchanged when the query is below
    /// [`SearchConfig::min_search_length`].
    pub fn filtered<'a>(&self, items: &'a [MenuItem]) -> Cow<'a, [MenuItem]> {
        filter_recursive(items, &self.query, &self.config.filter_options())
    }

    /// The keyboard-navigable linearization of a tree returned by
    /// [`SearchController::filtered`]. Highlight indices point into this.
    pub fn flattened<'a>(&self, filtered: &'a [MenuItem]) -> Vec<FlatEntry<'a>> {
        flatten(filtered)
    }

    /// Number of keyboard-navigable rows for `items`.
    pub fn navigable_len(&self, items: &[MenuItem]) -> usize {
        self.flattened(&self.filtered(items)).len()
    }

    /// The user edited the input.
    pub fn on_text_input(&mut self, value: &str, now: Millis) {
        if self.config.disabled {
            return;
        }
        self.set_text(value, now);
        self.highlighted = None;
        if !self.is_open && !value.is_empty() {
            self.is_open = true;
            debug!("dropdown opened by typing");
        }
    }

    /// The input gained focus; the dropdown opens.
    pub fn on_focus(&mut self) {
        if self.config.disabled {
            return;
        }
        if !self.is_open {
            self.is_open = true;
            debug!("dropdown opened by focus");
        }
    }

    /// Commit the debounced text if it is due.
    ///
    /// Calls [`SearchHost::search_change`] with the committed text. When the
    /// query actually changes, the highlight is cleared because it indexed
    /// the previous result list. Returns whether a commit happened.
    pub fn tick(&mut self, now: Millis, host: &mut impl SearchHost) -> bool {
        let Some(text) = self.debounce.poll(now) else {
            return false;
        };
        if text != self.query {
            self.query = text;
            self.highlighted = None;
        }
        debug!(query = %self.query, now, "search committed");
        host.search_change(&self.query);
        true
    }

    /// A navigation or commit key was pressed in the input.
    pub fn on_keyboard(
        &mut self,
        key: Key,
        items: &[MenuItem],
        now: Millis,
        host: &mut impl SearchHost,
    ) -> KeyResponse {
        if self.config.disabled {
            return KeyResponse::IGNORED;
        }
        match key {
            Key::ArrowDown => {
                if self.is_open {
                    self.move_highlight(items, Step::Forward);
                } else {
                    self.is_open = true;
                    debug!("dropdown opened by keyboard");
                }
                KeyResponse::HANDLED
            }
            Key::ArrowUp => {
                if self.is_open {
                    self.move_highlight(items, Step::Backward);
                }
                KeyResponse::HANDLED
            }
            Key::Enter => {
                let filtered = self.filtered(items);
                let flat = self.flattened(&filtered);
                let target = self
                    .highlighted
                    .filter(|_| self.is_open)
                    .and_then(|i| flat.get(i))
                    .map(|entry| entry.item);
                if let Some(item) = target {
                    self.select_item(item, now, host);
                } else if self.config.allow_custom_value && !self.text.is_empty() {
                    self.submit_custom(host);
                }
                KeyResponse::HANDLED
            }
            Key::Escape => {
                self.dismiss();
                KeyResponse {
                    prevent_default: false,
                    focus: Some(FocusRequest::Blur),
                }
            }
            Key::Tab => {
                self.dismiss();
                KeyResponse::IGNORED
            }
        }
    }

    /// Choose `item`: the input shows its label and the dropdown closes.
    ///
    /// Calls [`SearchHost::item_select`], then the item's own
    /// [`on_click`](MenuItem::on_click). Disabled items are ignored.
    pub fn select_item(&mut self, item: &MenuItem, now: Millis, host: &mut impl SearchHost) {
        if item.disabled {
            trace!(id = %item.id, "selection ignored: item disabled");
            return;
        }
        self.set_text(&item.label, now);
        self.is_open = false;
        self.highlighted = None;
        debug!(id = %item.id, "item selected");
        host.item_select(Some(item));
        if let Some(action) = &item.on_click {
            action.invoke();
        }
    }

    /// The clear button: empty the input, close, and deselect.
    ///
    /// Returns the focus change the host should apply so typing can resume.
    pub fn clear(&mut self, now: Millis, host: &mut impl SearchHost) -> FocusRequest {
        self.set_text("", now);
        self.is_open = false;
        self.highlighted = None;
        debug!("selection cleared");
        host.item_select(None);
        FocusRequest::Focus
    }

    /// The pointer entered row `index` of the flattened list for `items`.
    ///
    /// Indices past the end of the list are ignored.
    pub fn hover_row(&mut self, index: usize, items: &[MenuItem]) {
        if index < self.navigable_len(items) {
            self.highlighted = Some(index);
        } else {
            trace!(index, "hover ignored: row out of range");
        }
    }

    /// The "add" affordance shown with no results.
    ///
    /// Submits the input text as a custom value when allowed and non-empty.
    /// Returns whether anything was submitted.
    pub fn choose_custom_option(&mut self, host: &mut impl SearchHost) -> bool {
        if !self.config.allow_custom_value || self.text.is_empty() {
            return false;
        }
        self.submit_custom(host);
        true
    }

    /// A pointer press at `point`. Closes the dropdown when it lands outside
    /// the container. Returns whether the state changed.
    ///
    /// Without a registered container every press counts as outside.
    pub fn on_outside_interaction(&mut self, point: Point) -> bool {
        let inside = self.container.is_some_and(|r| r.contains(point));
        self.on_outside_target(inside)
    }

    /// Like [`SearchController::on_outside_interaction`] for hosts that
    /// hit-test on their own.
    pub fn on_outside_target(&mut self, inside: bool) -> bool {
        if inside || (!self.is_open && self.highlighted.is_none()) {
            return false;
        }
        debug!("outside press");
        self.dismiss();
        true
    }

    /// Follow the host's controlled selection.
    ///
    /// When it differs from the last one reported, the input text is
    /// overwritten with the item's label, or emptied for `None`, discarding
    /// anything typed since. Reporting the same selection again does nothing.
    pub fn sync_selected(&mut self, selected: Option<&MenuItem>, now: Millis) {
        let id = selected.map(|item| item.id.clone());
        if self.selected.as_ref() == Some(&id) {
            return;
        }
        trace!(selected = ?id, "selection synced");
        self.selected = Some(id);
        let label = selected.map_or("", |item| item.label.as_str());
        self.set_text(label, now);
    }

    /// Tear down: drop any pending commit.
    pub fn unmount(&mut self) {
        let dropped = self.debounce.cancel().is_some();
        self.is_open = false;
        self.highlighted = None;
        debug!(dropped, "search unmounted");
    }

    fn set_text(&mut self, value: &str, now: Millis) {
        if self.text == value {
            return;
        }
        self.text.clear();
        self.text.push_str(value);
        self.debounce.push(self.text.clone(), now);
        trace!(now, "search debounce restarted");
    }

    fn move_highlight(&mut self, items: &[MenuItem], step: Step) {
        let len = self.navigable_len(items);
        self.highlighted = step_highlight(self.highlighted, len, step);
        trace!(highlighted = ?self.highlighted, len, "highlight moved");
    }

    fn submit_custom(&mut self, host: &mut impl SearchHost) {
        debug!(text = %self.text, "custom value submitted");
        host.custom_value(&self.text);
        self.is_open = false;
    }

    fn dismiss(&mut self) {
        self.is_open = false;
        self.highlighted = None;
    }
}
