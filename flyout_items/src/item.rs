// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`MenuItem`] node and the small value types hanging off it.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::ParseError;

/// A host-owned, zero-argument side effect attached to an item.
///
/// Cloning an `Action` shares the same closure, so filtered copies of a tree
/// still call back into the host's original handler.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Run the closure once.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

impl<F: Fn() + 'static> From<F> for Action {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// An item's icon: either literal text (an emoji, a glyph name) or an opaque
/// handle into the host's own renderable store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Icon {
    /// Text rendered as-is.
    Text(String),
    /// Host-defined renderable.
    Handle(u64),
}

impl Icon {
    /// The icon text, if this is a text icon.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Handle(_) => None,
        }
    }
}

/// A node in the menu forest.
///
/// Trees are supplied by the host on every call; controllers borrow them and
/// never keep them. Sibling order is both display order and keyboard order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct MenuItem {
    /// Identifier, unique among siblings and assumed unique across the tree.
    pub id: String,
    /// Display text.
    pub label: String,
    /// Navigation target. Only honored on leaves; see [`MenuItem::href`].
    pub link: Option<String>,
    /// Side effect run when the item is activated.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_click: Option<Action>,
    /// Optional icon.
    pub icon: Option<Icon>,
    /// Inert items render but never react to clicks, hover, or keys.
    pub disabled: bool,
    /// Current-selection indicator. Display only.
    pub active: bool,
    /// Child items; non-empty makes this item a submenu parent.
    pub children: Vec<MenuItem>,
    /// Passthrough class name.
    pub class_name: Option<String>,
    /// Passthrough inline style declarations.
    pub style: BTreeMap<String, String>,
}

impl MenuItem {
    /// Create an enabled leaf item.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the navigation link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the click action.
    #[must_use]
    pub fn with_on_click(mut self, action: impl Into<Action>) -> Self {
        self.on_click = Some(action.into());
        self
    }

    /// Replace the children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Set the passthrough class name.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Add one inline style declaration.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Mark the item disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark the item active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Whether this item opens a submenu.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this item is directly activatable (ignoring `disabled`).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The hyperlink a renderer should expose, if any.
    ///
    /// Parents never render as links even when `link` is set; activating a
    /// parent toggles its submenu instead.
    pub fn href(&self) -> Option<&str> {
        self.link.as_deref().filter(|_| self.is_leaf())
    }

    /// The string value of a searchable field.
    ///
    /// Fields that do not hold a string (flags, children, style, actions, or
    /// an icon handle) yield `None` and therefore never match a query.
    pub fn field(&self, key: SearchKey) -> Option<&str> {
        match key {
            SearchKey::Id => Some(&self.id),
            SearchKey::Label => Some(&self.label),
            SearchKey::Link => self.link.as_deref(),
            SearchKey::Icon => self.icon.as_ref().and_then(Icon::as_text),
            SearchKey::ClassName => self.class_name.as_deref(),
            SearchKey::Disabled
            | SearchKey::Active
            | SearchKey::Children
            | SearchKey::Style
            | SearchKey::OnClick => None,
        }
    }
}

/// A [`MenuItem`] field that a search query may be matched against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum SearchKey {
    /// [`MenuItem::id`].
    Id,
    /// [`MenuItem::label`].
    Label,
    /// [`MenuItem::link`].
    Link,
    /// [`MenuItem::icon`], when it is text.
    Icon,
    /// [`MenuItem::class_name`].
    ClassName,
    /// [`MenuItem::disabled`]. Never matches.
    Disabled,
    /// [`MenuItem::active`]. Never matches.
    Active,
    /// [`MenuItem::children`]. Never matches.
    Children,
    /// [`MenuItem::style`]. Never matches.
    Style,
    /// [`MenuItem::on_click`]. Never matches.
    OnClick,
}

/// Keys searched when none are configured.
pub const DEFAULT_SEARCH_KEYS: [SearchKey; 2] = [SearchKey::Label, SearchKey::Id];

impl SearchKey {
    /// The field's name as hosts spell it in configuration.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Label => "label",
            Self::Link => "link",
            Self::Icon => "icon",
            Self::ClassName => "className",
            Self::Disabled => "disabled",
            Self::Active => "active",
            Self::Children => "children",
            Self::Style => "style",
            Self::OnClick => "onClick",
        }
    }
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "id" => Self::Id,
            "label" => Self::Label,
            "link" => Self::Link,
            "icon" => Self::Icon,
            "className" => Self::ClassName,
            "disabled" => Self::Disabled,
            "active" => Self::Active,
            "children" => Self::Children,
            "style" => Self::Style,
            "onClick" => Self::OnClick,
            _ => return Err(ParseError::unknown("search key", s)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::Cell;

    #[test]
    fn href_is_only_exposed_on_leaves() {
        let leaf = MenuItem::new("docs", "Docs").with_link("/docs");
        let parent = MenuItem::new("more", "More")
            .with_link("/more")
            .with_children([MenuItem::new("a", "A")]);

        assert_eq!(leaf.href(), Some("/docs"));
        assert_eq!(parent.href(), None);
        assert!(parent.has_children(), "non-empty children make a parent");
    }

    #[test]
    fn empty_children_is_a_leaf() {
        let item = MenuItem::new("x", "X").with_children(vec![]);
        assert!(item.is_leaf(), "an empty child list is still a leaf");
    }

    #[test]
    fn non_string_fields_never_yield_values() {
        let item = MenuItem::new("i", "Item")
            .with_icon(Icon::Handle(7))
            .with_style("color", "red")
            .active();

        assert_eq!(item.field(SearchKey::Label), Some("Item"));
        assert_eq!(item.field(SearchKey::Icon), None);
        assert_eq!(item.field(SearchKey::Style), None);
        assert_eq!(item.field(SearchKey::Active), None);
        assert_eq!(
            item.clone().with_icon(Icon::Text("*".into())).field(SearchKey::Icon),
            Some("*")
        );
    }

    #[test]
    fn cloned_actions_share_the_closure() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let item = MenuItem::new("a", "A").with_on_click(move || counter.set(counter.get() + 1));
        let copy = item.clone();

        for action in [&item.on_click, &copy.on_click].into_iter().flatten() {
            action.invoke();
        }
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn search_keys_parse_by_host_name() {
        assert_eq!("className".parse::<SearchKey>(), Ok(SearchKey::ClassName));
        assert_eq!(SearchKey::OnClick.to_string(), "onClick");
        assert!("colour".parse::<SearchKey>().is_err(), "unknown keys are rejected");
    }
}
