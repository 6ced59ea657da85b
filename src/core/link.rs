// Link creation and removal through a user prompt.

use super::selection::SelectionContext;
use super::state::FormattingCapability;

pub const CREATE_LINK_COMMAND: &str = "createLink";
pub const UNLINK_COMMAND: &str = "unlink";

/// Asks the user for a line of text (`window.prompt` in a browser).
pub trait Prompter {
    /// `None` when the user dismissed the prompt.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Cancelled,
    Unlinked,
    Linked(String),
}

// The URL is passed on verbatim; the host decides what it accepts.
pub fn apply_link<N, H>(
    context: &SelectionContext<N>,
    host: &mut H,
    message: &str,
    placeholder: &str,
) -> LinkOutcome
where
    H: Prompter + FormattingCapability + ?Sized,
{
    let default = context.link_target().unwrap_or(placeholder);
    match host.prompt(message, default) {
        None => LinkOutcome::Cancelled,
        Some(url) if url.is_empty() => {
            host.execute(UNLINK_COMMAND, None);
            LinkOutcome::Unlinked
        }
        Some(url) => {
            host.execute(CREATE_LINK_COMMAND, Some(&url));
            LinkOutcome::Linked(url)
        }
    }
}
