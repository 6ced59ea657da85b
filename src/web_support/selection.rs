use super::core::DomNode;
use crate::core::{BlockError, BlockSurgery, Carry, Rect, SelectionSource};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

fn dom_err(err: JsValue) -> BlockError {
    BlockError::Dom(format!("{err:?}"))
}

// The document's live selection. Only the first range is ever looked at.
pub struct DomSelection {
    selection: web_sys::Selection,
    document: web_sys::Document,
}

impl DomSelection {
    pub fn new(selection: web_sys::Selection, document: web_sys::Document) -> Self {
        Self {
            selection,
            document,
        }
    }

    fn range(&self) -> Option<web_sys::Range> {
        if self.selection.range_count() == 0 {
            return None;
        }
        self.selection.get_range_at(0).ok()
    }

    fn create(&self, tag: &str) -> Result<web_sys::Element, BlockError> {
        self.document.create_element(tag).map_err(dom_err)
    }
}

impl SelectionSource for DomSelection {
    type Node = DomNode;

    fn text(&self) -> Option<String> {
        if self.selection.range_count() == 0 {
            return None;
        }
        Some(self.selection.to_string().into())
    }

    fn start_element(&self) -> Option<DomNode> {
        let container = self.range()?.start_container().ok()?;
        DomNode::containing(&container)
    }

    fn bounding_box(&self) -> Option<Rect> {
        if self.selection.is_collapsed() {
            return None;
        }
        let rect = self.range()?.get_bounding_client_rect();
        Some(Rect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        })
    }

    fn clear(&mut self) {
        // Failing to clear leaves a stale but valid selection.
        let _ = self.selection.remove_all_ranges();
    }
}

impl BlockSurgery for DomSelection {
    type Node = DomNode;

    fn replace_block(
        &mut self,
        target: &DomNode,
        tag: &str,
        carry: Carry,
    ) -> Result<DomNode, BlockError> {
        let old = target.element();
        // A Document parent means `old` is <html>, which is never ours to replace.
        if old.parent_element().is_none() {
            return Err(BlockError::NoParent);
        }

        let replacement = self.create(tag)?;
        match carry {
            Carry::TextOnly => {
                let text = match old.dyn_ref::<HtmlElement>() {
                    Some(elem) => elem.inner_text(),
                    None => old.text_content().unwrap_or_default(),
                };
                replacement.set_text_content(Some(&text));
            }
            Carry::Markup => replacement.set_inner_html(&old.inner_html()),
        }

        // One splice: if it fails, `old` is still in place.
        old.replace_with_with_node_1(&replacement).map_err(dom_err)?;
        Ok(DomNode::new(replacement))
    }

    fn surround_selection(&mut self, tag: &str) -> Result<DomNode, BlockError> {
        let range = self.range().ok_or(BlockError::NoRange)?;
        let wrapper = self.create(tag)?;
        range.surround_contents(&wrapper).map_err(dom_err)?;
        Ok(DomNode::new(wrapper))
    }
}

