// Copyright 2025 the Flyout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal helpers over a `&[MenuItem]` forest.
//!
//! - [`walk`] visits every node in pre-order together with its depth.
//! - [`flatten`] is the keyboard-navigable linearization: [`walk`] minus
//!   disabled items.
//! - [`filter_recursive`] produces a pruned copy that keeps matches and the
//!   ancestors of matches.
//!
//! None of these mutate the input; filtering clones the nodes it keeps and
//! borrows the input unchanged when no filtering applies.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{DEFAULT_SEARCH_KEYS, MenuItem, SearchKey};

/// One entry of a pre-order traversal.
#[derive(Copy, Clone, Debug)]
pub struct FlatEntry<'a> {
    /// The visited node.
    pub item: &'a MenuItem,
    /// Nesting level, `0` for roots.
    pub depth: usize,
}

/// Pre-order iterator over a forest. See [`walk`].
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    // Pending siblings per level, innermost last. Each slot is the remaining
    // tail of a child list together with its depth.
    stack: SmallVec<[(&'a [MenuItem], usize); 8]>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (siblings, depth) = self.stack.last_mut()?;
            let depth = *depth;
            let current: &'a [MenuItem] = *siblings;
            let Some((item, rest)) = current.split_first() else {
                self.stack.pop();
                continue;
            };
            *siblings = rest;
            if item.has_children() {
                self.stack.push((&item.children, depth + 1));
            }
            return Some(FlatEntry { item, depth });
        }
    }
}

/// Visit every node of `items` in pre-order, parents before their children.
pub fn walk(items: &[MenuItem]) -> Walk<'_> {
    let mut stack = SmallVec::new();
    stack.push((items, 0));
    Walk { stack }
}

/// The keyboard-navigable linearization of `items`.
///
/// Disabled items are skipped entirely and do not occupy an index. Their
/// children are still visited at their own depth.
pub fn flatten(items: &[MenuItem]) -> Vec<FlatEntry<'_>> {
    walk(items).filter(|e| !e.item.disabled).collect()
}

/// Depth-first lookup by id.
pub fn find<'a>(items: &'a [MenuItem], id: &str) -> Option<&'a MenuItem> {
    walk(items).map(|e| e.item).find(|item| item.id == id)
}

/// Options controlling [`filter_recursive`].
#[derive(Copy, Clone, Debug)]
pub struct FilterOptions<'a> {
    /// Fields matched against the query.
    pub search_keys: &'a [SearchKey],
    /// Compare case-sensitively.
    pub case_sensitive: bool,
    /// Queries shorter than this (in characters) leave the tree unfiltered.
    pub min_search_length: usize,
}

impl Default for FilterOptions<'static> {
    fn default() -> Self {
        Self {
            search_keys: &DEFAULT_SEARCH_KEYS,
            case_sensitive: false,
            min_search_length: 0,
        }
    }
}

/// Substring matcher over the configured [`SearchKey`]s of an item.
#[derive(Clone, Debug)]
pub struct Matcher<'a> {
    needle: Cow<'a, str>,
    keys: &'a [SearchKey],
    case_sensitive: bool,
}

impl<'a> Matcher<'a> {
    /// Prepare a matcher for `query`.
    pub fn new(query: &'a str, options: &FilterOptions<'a>) -> Self {
        let needle = if options.case_sensitive {
            Cow::Borrowed(query)
        } else {
            Cow::Owned(query.to_lowercase())
        };
        Self {
            needle,
            keys: options.search_keys,
            case_sensitive: options.case_sensitive,
        }
    }

    /// Whether any configured string field of `item` contains the query.
    pub fn matches(&self, item: &MenuItem) -> bool {
        self.keys.iter().any(|&key| {
            item.field(key).is_some_and(|value| {
                if self.case_sensitive {
                    value.contains(&*self.needle)
                } else {
                    value.to_lowercase().contains(&*self.needle)
                }
            })
        })
    }
}

/// Filter `items` by `query`.
///
/// A node that matches is kept with all of its children. A node that does not
/// match is kept only if some descendant matches, and then only with the
/// matching branches beneath it. When `query` is shorter than
/// [`FilterOptions::min_search_length`] the input is returned as-is.
pub fn filter_recursive<'a>(
    items: &'a [MenuItem],
    query: &str,
    options: &FilterOptions<'_>,
) -> Cow<'a, [MenuItem]> {
    if query.chars().count() < options.min_search_length {
        return Cow::Borrowed(items);
    }
    let matcher = Matcher::new(query, options);
    Cow::Owned(filter_level(items, &matcher))
}

fn filter_level(items: &[MenuItem], matcher: &Matcher<'_>) -> Vec<MenuItem> {
    let mut kept = Vec::new();
    for item in items {
        if matcher.matches(item) {
            kept.push(item.clone());
        } else if item.has_children() {
            let children = filter_level(&item.children, matcher);
            if !children.is_empty() {
                let mut pruned = item.clone();
                pruned.children = children;
                kept.push(pruned);
            }
        }
    }
    kept
}
