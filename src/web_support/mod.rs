// The only place that touches web_sys directly.
mod core;
mod selection;

pub use self::core::{DomHost, DomNode};
pub use self::selection::DomSelection;
