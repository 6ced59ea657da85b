pub mod config;
pub mod core;
pub mod frontend;
pub mod web_support;

pub use config::ToolbarConfig;
pub use frontend::FormattingBar;
