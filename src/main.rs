use anyhow::{Result, anyhow};
use formatbar::{FormattingBar, ToolbarConfig};
use leptos::logging::log;
use leptos::prelude::*;

// A host page may hand the toolbar its configuration as JSON on <body>.
const CONFIG_ATTR: &str = "data-toolbar-config";

fn load_config() -> Result<ToolbarConfig> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| anyhow!("no document body"))?;
    match body.get_attribute(CONFIG_ATTR) {
        Some(json) => ToolbarConfig::from_json(&json),
        None => Ok(ToolbarConfig::default()),
    }
}

#[component]
fn Demo(config: ToolbarConfig) -> impl IntoView {
    let editing = RwSignal::new(false);

    view! {
        <FormattingBar
            config
            on_editing_changed=move |value: bool| editing.set(value)
            on_format=move |()| log!("block format applied")
        />
        <article
            id="article"
            contenteditable="true"
            spellcheck="false"
            class:editing=move || editing.get()
        >
            <h2>"Select some text"</h2>
            <p>"A floating bar appears above the selection. Try a "<a href="https://example.com/">"link"</a>" too."</p>
            <blockquote>"Quoted text can be cleared back to plain text."</blockquote>
        </article>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config().unwrap_or_else(|err| {
        log!("using default toolbar config: {err:#}");
        ToolbarConfig::default()
    });
    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        view! { <Demo config /> }
    })
}
