// Block formatting by direct document surgery: the block under the editable
// root is swapped for a fresh element (or the bare range gets wrapped).

use super::selection::{SelectionContext, TreeNode};
use thiserror::Error;

// Inline container used when a block is cleared or toggled off.
pub const NEUTRAL_TAG: &str = "span";
pub const CLEAR_COMMAND: &str = "clear";

// What a replacement element inherits from the element it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    TextOnly,
    Markup,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
    #[error("selection is not inside the editable root")]
    OutsideEditableRoot,
    #[error("selected block has no parent to splice into")]
    NoParent,
    #[error("no selection range to operate on")]
    NoRange,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockOutcome<N> {
    // `target` was replaced by this new element.
    Replaced(N),
    // The bare selection range was wrapped in this new element.
    Wrapped(N),
    // Nothing to do (`clear` outside any block).
    Unchanged,
}

impl<N> BlockOutcome<N> {
    pub fn mutated(&self) -> bool {
        !matches!(self, BlockOutcome::Unchanged)
    }

    // The element the surgery created, if any.
    pub fn node(&self) -> Option<&N> {
        match self {
            BlockOutcome::Replaced(node) | BlockOutcome::Wrapped(node) => Some(node),
            BlockOutcome::Unchanged => None,
        }
    }
}

/// Structural mutations the block transformer needs from the host document.
pub trait BlockSurgery {
    type Node: TreeNode;

    /// Put a new `tag` element where `target` is, holding `target`'s text or markup.
    fn replace_block(
        &mut self,
        target: &Self::Node,
        tag: &str,
        carry: Carry,
    ) -> Result<Self::Node, BlockError>;

    /// Wrap the current selection range in a new `tag` element.
    fn surround_selection(&mut self, tag: &str) -> Result<Self::Node, BlockError>;
}

/// Apply `command` (`"h2"`, `"blockquote"`, `"clear"`, ...) to the selection.
///
/// Toggle semantics: a command already present in the ancestor chain turns the
/// block into a neutral container instead of nesting another one. Failures
/// leave the document as it was and are for the caller to ignore. A context
/// that never reached the editable root is refused before any surgery.
pub fn apply_block<S: BlockSurgery>(
    command: &str,
    context: &SelectionContext<S::Node>,
    surgery: &mut S,
) -> Result<BlockOutcome<S::Node>, BlockError> {
    if !context.boundary_reached() {
        return Err(BlockError::OutsideEditableRoot);
    }
    match context.block_root() {
        Some(target) => {
            let (tag, carry) = if command == CLEAR_COMMAND {
                (NEUTRAL_TAG, Carry::TextOnly)
            } else if context.has_ancestor(command) {
                (NEUTRAL_TAG, Carry::Markup)
            } else {
                (command, Carry::Markup)
            };
            surgery
                .replace_block(target, tag, carry)
                .map(BlockOutcome::Replaced)
        }
        None if command == CLEAR_COMMAND => Ok(BlockOutcome::Unchanged),
        None => surgery.surround_selection(command).map(BlockOutcome::Wrapped),
    }
}
