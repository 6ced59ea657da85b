// Browser implementations of the toolbar's collaborators. The core never sees a
// web_sys type; everything it touches goes through these wrappers.

use super::selection::DomSelection;
use crate::core::{ClassList, EditorHost, FormattingCapability, Prompter, Size, TreeNode};
use leptos::html::Section;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlDocument, HtmlElement};

// An element of the live document.
#[derive(Clone, Debug, PartialEq)]
pub struct DomNode(pub(super) web_sys::Element);

impl DomNode {
    pub fn new(elem: web_sys::Element) -> Self {
        Self(elem)
    }

    // The element holding `node`: itself if it is one, else its parent element.
    pub fn containing(node: &web_sys::Node) -> Option<Self> {
        match node.dyn_ref::<web_sys::Element>() {
            Some(elem) => Some(Self(elem.clone())),
            None => node.parent_element().map(Self),
        }
    }

    pub fn element(&self) -> &web_sys::Element {
        &self.0
    }
}

impl TreeNode for DomNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(Self)
    }

    fn tag_name(&self) -> String {
        self.0.tag_name().to_lowercase()
    }

    fn is_editable_root(&self) -> bool {
        self.0
            .dyn_ref::<HtmlElement>()
            .is_some_and(|elem| elem.content_editable() == "true")
    }

    fn href(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlAnchorElement>().map(|a| a.href())
    }
}

impl ClassList for DomNode {
    fn classes(&self) -> Vec<String> {
        let list = self.0.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log!("could not add class {class}: {err:?}");
        }
    }
}

/// The document the toolbar floats over, plus the toolbar's own element.
pub struct DomHost {
    document: Option<HtmlDocument>,
    bar: NodeRef<Section>,
}

impl DomHost {
    pub fn new(bar: NodeRef<Section>) -> Self {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok());
        Self { document, bar }
    }
}

impl FormattingCapability for DomHost {
    fn query_state(&self, command: &str) -> bool {
        self.document
            .as_ref()
            .and_then(|d| d.query_command_state(command).ok())
            .unwrap_or(false)
    }

    fn execute(&mut self, command: &str, argument: Option<&str>) -> bool {
        let Some(document) = &self.document else {
            return false;
        };
        let result = match argument {
            Some(value) => document.exec_command_with_show_ui_and_value(command, false, value),
            None => document.exec_command(command),
        };
        result.unwrap_or(false)
    }
}

impl Prompter for DomHost {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
}

impl EditorHost for DomHost {
    type Node = DomNode;
    type Selection = DomSelection;

    fn current_selection(&self) -> Option<DomSelection> {
        let document: &web_sys::Document = self.document.as_ref()?;
        let selection = document.get_selection().ok().flatten()?;
        Some(DomSelection::new(selection, document.clone()))
    }

    fn toolbar_size(&self) -> Option<Size> {
        let rect = self.bar.get_untracked()?.get_bounding_client_rect();
        Some(Size {
            width: rect.width(),
            height: rect.height(),
        })
    }
}
