// Per-button enabled state.

use super::registry::{Category, FormattingOption};
use super::selection::SelectionContext;

/// The native formatting primitives of the editing host
/// (`queryCommandState` / `execCommand` in a browser).
pub trait FormattingCapability {
    fn query_state(&self, command: &str) -> bool;

    // Returns whether the host accepted the command.
    fn execute(&mut self, command: &str, argument: Option<&str>) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub option: FormattingOption,
    pub enabled: bool,
}

pub fn is_enabled<N, F>(option: &FormattingOption, context: &SelectionContext<N>, native: &F) -> bool
where
    F: FormattingCapability + ?Sized,
{
    match option.category {
        Category::Inline => native.query_state(&option.name),
        Category::Block => context.has_ancestor(&option.name),
        Category::Link => context.has_ancestor("a"),
    }
}

// Computed fresh for every render pass.
pub fn button_states<N, F>(
    options: &[FormattingOption],
    context: &SelectionContext<N>,
    native: &F,
) -> Vec<ButtonState>
where
    F: FormattingCapability + ?Sized,
{
    options
        .iter()
        .map(|option| ButtonState {
            option: option.clone(),
            enabled: is_enabled(option, context, native),
        })
        .collect()
}
