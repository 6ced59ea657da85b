pub mod block;
mod editor;
pub mod frame;
pub mod geometry;
pub mod link;
pub mod registry;
pub mod scope;
pub mod selection;
pub mod state;

#[cfg(test)]
pub(crate) mod mock;

// The state machine types are what hosts use directly.
pub use block::{BlockError, BlockOutcome, BlockSurgery, Carry};
pub use editor::{EditorHost, FormatToolbar, Notification};
pub use geometry::{Rect, Size, ToolbarGeometry};
pub use link::Prompter;
pub use registry::{Category, FormattingOption};
pub use scope::ClassList;
pub use selection::{SelectionContext, SelectionSource, TreeNode};
pub use state::{ButtonState, FormattingCapability};
