// Scoped style classes (`style-scope <host>`) live on every element rendered by a
// shadow-DOM polyfill. Elements created by block surgery start without them, so
// they are copied from the editable root onto the rebuilt ancestors.

use super::selection::TreeNode;

pub const SCOPE_MARKER_CLASS: &str = "style-scope";

pub trait ClassList: TreeNode {
    fn classes(&self) -> Vec<String>;
    fn add_class(&self, class: &str);
}

// The scoping suffix of a class list, starting at the marker class.
pub fn scoped_classes(classes: &[String]) -> &[String] {
    match classes.iter().position(|c| c == SCOPE_MARKER_CLASS) {
        Some(start) => &classes[start..],
        None => &[],
    }
}

/// Copy the editable root's scoping classes onto `start` and each ancestor below
/// the root. Returns the number of elements touched.
pub fn resync_scoped_classes<N: ClassList>(start: &N) -> usize {
    let mut chain = Vec::new();
    let mut current = Some(start.clone());
    let root = loop {
        match current {
            Some(node) if node.is_editable_root() => break node,
            Some(node) => {
                current = node.parent();
                chain.push(node);
            }
            // Outside the editable area: nothing to copy from.
            None => return 0,
        }
        if chain.len() > super::selection::MAX_ANCESTOR_DEPTH {
            return 0;
        }
    };

    let root_classes = root.classes();
    let scoped = scoped_classes(&root_classes);
    if scoped.is_empty() {
        return 0;
    }
    for node in &chain {
        for class in scoped {
            node.add_class(class);
        }
    }
    chain.len()
}
