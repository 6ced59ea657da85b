// Selection classification: describe where the current selection sits inside the
// editable area by walking from the element holding the range start up to the
// editable root.

use super::geometry::Rect;
use leptos::logging::log;
use std::collections::HashSet;

// Any real document is far shallower than this. The bound only exists so a
// tree with a parent cycle cannot hang the selection handler.
pub const MAX_ANCESTOR_DEPTH: usize = 1024;

/// A node of the document tree, as far as the toolbar cares about it.
pub trait TreeNode: Clone {
    fn parent(&self) -> Option<Self>;
    /// Lowercase tag name (`"a"`, `"h2"`, ...).
    fn tag_name(&self) -> String;
    /// True for the element marking the outer limit of the editable surface.
    fn is_editable_root(&self) -> bool;
    /// Link target, only meaningful for `a` elements.
    fn href(&self) -> Option<String>;
}

/// The ambient selection, queried after a "selection changed" signal.
pub trait SelectionSource {
    type Node: TreeNode;

    /// Selected text, or `None` when there is no selection at all.
    fn text(&self) -> Option<String>;

    /// The element containing the start of the first range.
    fn start_element(&self) -> Option<Self::Node>;

    /// Bounding box of the first range; `None` when collapsed or detached.
    fn bounding_box(&self) -> Option<Rect>;

    /// Drop every range (`removeAllRanges`).
    fn clear(&mut self);
}

// Snapshot of the selection's structural context. Replaced wholesale on every
// selection change, never patched.
#[derive(Debug, Clone)]
pub struct SelectionContext<N> {
    raw_text: String,
    non_empty: bool,
    ancestor_chain: Vec<N>,
    ancestor_tag_names: HashSet<String>,
    link_target: Option<String>,
    boundary_reached: bool,
}

impl<N> Default for SelectionContext<N> {
    fn default() -> Self {
        Self {
            raw_text: String::new(),
            non_empty: false,
            ancestor_chain: Vec::new(),
            ancestor_tag_names: HashSet::new(),
            link_target: None,
            boundary_reached: false,
        }
    }
}

impl<N> SelectionContext<N> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn non_empty(&self) -> bool {
        self.non_empty
    }

    // Leaf first: index 0 holds the element containing the range start, the
    // last entry is the element sitting directly beneath the editable root.
    pub fn ancestor_chain(&self) -> &[N] {
        &self.ancestor_chain
    }

    pub fn ancestor_tag_names(&self) -> &HashSet<String> {
        &self.ancestor_tag_names
    }

    pub fn has_ancestor(&self, tag: &str) -> bool {
        self.ancestor_tag_names.contains(tag)
    }

    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }

    /// False when the walk stopped before finding the editable root.
    pub fn boundary_reached(&self) -> bool {
        self.boundary_reached
    }

    // The block that a block command acts on.
    pub fn block_root(&self) -> Option<&N> {
        self.ancestor_chain.last()
    }
}

// Whitespace-only selections do not count as a selection.
fn has_visible_text(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}

/// Classify the current selection. Never fails: a missing selection, or one
/// whose walk never reaches the editable root, yields an empty context.
pub fn classify<S: SelectionSource>(selection: &S) -> SelectionContext<S::Node> {
    let Some(text) = selection.text() else {
        return SelectionContext::empty();
    };
    if !has_visible_text(&text) {
        return SelectionContext::empty();
    }

    let mut context = SelectionContext {
        raw_text: text,
        non_empty: true,
        ..SelectionContext::default()
    };

    let mut current = selection.start_element();
    while let Some(node) = current {
        if node.is_editable_root() {
            context.boundary_reached = true;
            break;
        }
        if context.ancestor_chain.len() >= MAX_ANCESTOR_DEPTH {
            log!("ancestor walk exceeded {MAX_ANCESTOR_DEPTH} levels, keeping partial chain");
            break;
        }

        let tag = node.tag_name();
        if tag == "a" && context.link_target.is_none() {
            context.link_target = node.href();
        }
        context.ancestor_tag_names.insert(tag);
        current = node.parent();
        context.ancestor_chain.push(node);
    }

    if !context.boundary_reached {
        // Host page text, a detached node or a cyclic tree: not ours to format.
        log!(
            "selection is outside the editable root ({} ancestors walked)",
            context.ancestor_chain.len()
        );
        return SelectionContext::empty();
    }
    context
}
