//! Leptos view of the floating formatting toolbar.
use crate::config::ToolbarConfig;
use crate::core::{ButtonState, FormatToolbar, Notification, ToolbarGeometry};
use crate::web_support::DomHost;
use leptos::html::Section;
use leptos::prelude::*;
use leptos_use::{use_document, use_event_listener};

mod button;

pub use button::FormatButton;

/// The toolbar bar itself. It listens to the document's `selectionchange`,
/// follows the selection around and applies formatting when a button is used.
///
/// ### Parameters
/// `config`: initial configuration (defaults to every option)
///
/// `options`: when given, replaces the configured option list whenever it changes
///
/// `on_editing_changed`: called with the new editing flag when it flips
///
/// `on_format`: called after a block transformation changed the document
#[component]
pub fn FormattingBar(
    #[prop(optional)] config: Option<ToolbarConfig>,
    #[prop(optional, into)] options: Option<Signal<Vec<String>>>,
    #[prop(optional, into)] on_editing_changed: Option<Callback<bool>>,
    #[prop(optional, into)] on_format: Option<Callback<()>>,
) -> impl IntoView {
    let bar_ref = NodeRef::<Section>::new();
    let toolbar = StoredValue::new_local(FormatToolbar::new(
        DomHost::new(bar_ref),
        config.unwrap_or_default(),
    ));

    // Render-pass copies of the toolbar's derived state.
    let editing = RwSignal::new(false);
    let geometry = RwSignal::new(None::<ToolbarGeometry>);
    let states = RwSignal::new(Vec::<ButtonState>::new());
    let last_command = RwSignal::new(None::<String>);

    let refresh = move || {
        toolbar.with_value(|t| {
            editing.set(t.editing());
            geometry.set(t.geometry());
            states.set(t.button_states());
        });
    };

    let notify = move |notifications: Vec<Notification>| {
        for notification in notifications {
            match notification {
                Notification::EditingChanged(value) => {
                    if let Some(callback) = on_editing_changed {
                        callback.run(value);
                    }
                }
                Notification::Format => {
                    if let Some(callback) = on_format {
                        callback.run(());
                    }
                }
            }
        }
    };

    let _ = use_event_listener(use_document(), leptos::ev::selectionchange, move |_| {
        let notifications = toolbar
            .try_update_value(|t| t.handle_selection_change())
            .unwrap_or_default();
        refresh();
        notify(notifications);
    });

    if let Some(options) = options {
        Effect::new(move |_| {
            let list = options.get();
            toolbar.update_value(|t| t.reconfigure(list));
            refresh();
        });
    } else {
        refresh();
    }

    let activate = Callback::new(move |id: String| {
        let notifications = toolbar
            .try_update_value(|t| t.activate(&id))
            .unwrap_or_default();
        refresh();
        notify(notifications);
        // "Last command" feedback lands after the mutation has been painted.
        request_animation_frame(move || {
            toolbar.update_value(|t| t.run_frame());
            last_command.set(toolbar.with_value(|t| t.last_command().map(str::to_string)));
        });
    });

    view! {
        <section
            id="formatting-bar"
            class="formatting-bar"
            node_ref=bar_ref
            data-hidden=move || (!editing.get()).then_some("")
            style:top=move || geometry.get().map(|g| g.top_px()).unwrap_or_default()
            style:left=move || geometry.get().map(|g| g.left_px()).unwrap_or_default()
        >
            {move || {
                states
                    .get()
                    .into_iter()
                    .map(|state| {
                        view! {
                            <FormatButton
                                state
                                last_command=last_command.read_only()
                                on_activate=activate
                            />
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
