use crate::core::ButtonState;
use leptos::prelude::*;

/// One toolbar button. Icon buttons only carry the icon name (`format-bold`);
/// painting it is up to the host stylesheet.
///
/// ### Parameters
/// `state`: the button and whether it applies to the current selection
///
/// `last_command`: id of the most recently used button
///
/// `on_activate`: called with the button id on click
#[component]
pub fn FormatButton(
    state: ButtonState,
    last_command: ReadSignal<Option<String>>,
    on_activate: Callback<String>,
) -> impl IntoView {
    let ButtonState { option, enabled } = state;
    let id = option.id.clone();
    let last_id = option.id.clone();

    let label = if option.has_icon {
        view! { <span class="icon" data-icon=format!("format-{}", option.name)></span> }.into_any()
    } else {
        view! { <span class="label">{option.name.clone()}</span> }.into_any()
    };

    view! {
        <button
            type="button"
            title=option.name.clone()
            data-type=option.category.as_str()
            data-action=option.id.clone()
            data-enabled=enabled.then_some("")
            data-last=move || last_command.with(|last| last.as_deref() == Some(last_id.as_str())).then_some("")
            // Keep the text selection alive while the button is pressed.
            on:mousedown=|ev| ev.prevent_default()
            on:click=move |_| on_activate.run(id.clone())
        >
            {label}
        </button>
    }
}
