// In-memory document and host used by the core tests.

use super::block::{BlockError, BlockSurgery, Carry};
use super::editor::EditorHost;
use super::geometry::{Rect, Size};
use super::link::Prompter;
use super::scope::ClassList;
use super::selection::{SelectionSource, TreeNode};
use super::state::FormattingCapability;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

const TEXT_TAG: &str = "#text";

struct NodeData {
    tag: String,
    text: String,
    href: Option<String>,
    editable_root: bool,
    classes: Vec<String>,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<MockNode>,
}

#[derive(Clone)]
pub struct MockNode(Rc<RefCell<NodeData>>);

impl PartialEq for MockNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MockNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockNode({})", self.0.borrow().tag)
    }
}

impl MockNode {
    fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            text: String::new(),
            href: None,
            editable_root: false,
            classes: Vec::new(),
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    fn is_text(&self) -> bool {
        self.0.borrow().tag == TEXT_TAG
    }

    pub fn children(&self) -> Vec<MockNode> {
        self.0.borrow().children.clone()
    }

    fn append(&self, child: &MockNode) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    fn text_content(&self) -> String {
        let data = self.0.borrow();
        if data.tag == TEXT_TAG {
            return data.text.clone();
        }
        data.children.iter().map(|c| c.text_content()).collect()
    }

    fn outer_markup(&self) -> String {
        let data = self.0.borrow();
        if data.tag == TEXT_TAG {
            return data.text.clone();
        }
        format!("<{}>{}</{}>", data.tag, self.inner_markup(), data.tag)
    }

    fn inner_markup(&self) -> String {
        self.0
            .borrow()
            .children
            .iter()
            .map(|c| c.outer_markup())
            .collect()
    }

    // Swap `self` for `replacement` in its parent's child list.
    fn replace_with(&self, replacement: &MockNode) -> Result<(), BlockError> {
        let parent = self.parent().ok_or(BlockError::NoParent)?;
        let index = parent
            .children()
            .iter()
            .position(|c| c == self)
            .ok_or(BlockError::NoParent)?;
        replacement.0.borrow_mut().parent = Rc::downgrade(&parent.0);
        parent.0.borrow_mut().children[index] = replacement.clone();
        self.0.borrow_mut().parent = Weak::new();
        Ok(())
    }
}

impl TreeNode for MockNode {
    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(MockNode)
    }

    fn tag_name(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn is_editable_root(&self) -> bool {
        self.0.borrow().editable_root
    }

    fn href(&self) -> Option<String> {
        self.0.borrow().href.clone()
    }
}

impl ClassList for MockNode {
    fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    fn add_class(&self, class: &str) {
        let mut data = self.0.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }
}

// A document whose root is the editable boundary (an `article`).
#[derive(Clone)]
pub struct MockDoc {
    root: MockNode,
}

impl MockDoc {
    pub fn new() -> Self {
        let root = MockNode::new("article");
        root.0.borrow_mut().editable_root = true;
        Self { root }
    }

    pub fn root(&self) -> MockNode {
        self.root.clone()
    }

    pub fn element(&self, parent: &MockNode, tag: &str) -> MockNode {
        let node = MockNode::new(tag);
        parent.append(&node);
        node
    }

    pub fn link(&self, parent: &MockNode, href: &str) -> MockNode {
        let node = self.element(parent, "a");
        node.0.borrow_mut().href = Some(href.to_string());
        node
    }

    pub fn text(&self, parent: &MockNode, text: &str) -> MockNode {
        let node = self.element(parent, TEXT_TAG);
        node.0.borrow_mut().text = text.to_string();
        node
    }

    // An element that is not attached anywhere.
    pub fn detached(&self, tag: &str) -> MockNode {
        MockNode::new(tag)
    }

    // Point `child`'s parent link at `parent` without touching child lists.
    pub fn reparent(&self, child: &MockNode, parent: &MockNode) {
        child.0.borrow_mut().parent = Rc::downgrade(&parent.0);
    }

    pub fn markup(&self) -> String {
        self.root.inner_markup()
    }
}

#[derive(Default)]
struct SelectionState {
    node: Option<MockNode>,
    text: Option<String>,
    rect: Option<Rect>,
    cleared: bool,
}

// Clones share state, so a clear through the host shows up in the test's copy.
#[derive(Clone, Default)]
pub struct MockSelection(Rc<RefCell<SelectionState>>);

impl MockSelection {
    pub fn none() -> Self {
        Self::default()
    }

    // Select all of `node`.
    pub fn over(node: &MockNode) -> Self {
        Self(Rc::new(RefCell::new(SelectionState {
            node: Some(node.clone()),
            text: Some(node.text_content()),
            rect: None,
            cleared: false,
        })))
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = Some(text.to_string());
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.0.borrow_mut().rect = Some(rect);
        self
    }

    pub fn is_cleared(&self) -> bool {
        self.0.borrow().cleared
    }

    fn node(&self) -> Option<MockNode> {
        let state = self.0.borrow();
        if state.cleared {
            return None;
        }
        state.node.clone()
    }
}

impl SelectionSource for MockSelection {
    type Node = MockNode;

    fn text(&self) -> Option<String> {
        let state = self.0.borrow();
        if state.cleared {
            return None;
        }
        state.text.clone()
    }

    fn start_element(&self) -> Option<MockNode> {
        let node = self.node()?;
        if node.is_text() { node.parent() } else { Some(node) }
    }

    fn bounding_box(&self) -> Option<Rect> {
        let state = self.0.borrow();
        if state.cleared {
            return None;
        }
        state.rect
    }

    fn clear(&mut self) {
        self.0.borrow_mut().cleared = true;
    }
}

impl BlockSurgery for MockSelection {
    type Node = MockNode;

    fn replace_block(
        &mut self,
        target: &MockNode,
        tag: &str,
        carry: Carry,
    ) -> Result<MockNode, BlockError> {
        if target.parent().is_none() {
            return Err(BlockError::NoParent);
        }
        let replacement = MockNode::new(tag);
        match carry {
            Carry::TextOnly => {
                let text = MockNode::new(TEXT_TAG);
                text.0.borrow_mut().text = target.text_content();
                replacement.append(&text);
            }
            Carry::Markup => {
                for child in target.children() {
                    replacement.append(&child);
                }
            }
        }
        target.replace_with(&replacement)?;
        Ok(replacement)
    }

    fn surround_selection(&mut self, tag: &str) -> Result<MockNode, BlockError> {
        let node = self.node().ok_or(BlockError::NoRange)?;
        let wrapper = MockNode::new(tag);
        node.replace_with(&wrapper)?;
        wrapper.append(&node);
        Ok(wrapper)
    }
}

#[derive(Default)]
pub struct MockNative {
    pub active: HashSet<String>,
    pub queries: RefCell<Vec<String>>,
    pub executed: Vec<(String, Option<String>)>,
}

impl FormattingCapability for MockNative {
    fn query_state(&self, command: &str) -> bool {
        self.queries.borrow_mut().push(command.to_string());
        self.active.contains(command)
    }

    fn execute(&mut self, command: &str, argument: Option<&str>) -> bool {
        self.executed
            .push((command.to_string(), argument.map(str::to_string)));
        true
    }
}

pub struct MockHost {
    pub selection: Option<MockSelection>,
    pub native: MockNative,
    pub prompt_answer: Option<String>,
    pub prompts: Vec<(String, String)>,
    pub toolbar: Option<Size>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            selection: None,
            native: MockNative::default(),
            prompt_answer: None,
            prompts: Vec::new(),
            toolbar: None,
        }
    }
}

impl FormattingCapability for MockHost {
    fn query_state(&self, command: &str) -> bool {
        self.native.query_state(command)
    }

    fn execute(&mut self, command: &str, argument: Option<&str>) -> bool {
        self.native.execute(command, argument)
    }
}

impl Prompter for MockHost {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.prompts.push((message.to_string(), default.to_string()));
        self.prompt_answer.clone()
    }
}

impl EditorHost for MockHost {
    type Node = MockNode;
    type Selection = MockSelection;

    fn current_selection(&self) -> Option<MockSelection> {
        self.selection.clone()
    }

    fn toolbar_size(&self) -> Option<Size> {
        self.toolbar
    }
}
