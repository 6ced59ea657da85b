// The toolbar state machine: selection change -> classify -> editing flag ->
// reposition; button activation -> inline command, block surgery or link prompt.

use super::block::{BlockSurgery, apply_block};
use super::frame::{FrameQueue, FrameTask};
use super::geometry::{Size, ToolbarGeometry, position};
use super::link::{Prompter, apply_link};
use super::registry::{Category, FormattingOption, expand};
use super::scope::{ClassList, resync_scoped_classes};
use super::selection::{SelectionContext, SelectionSource, classify};
use super::state::{ButtonState, FormattingCapability, button_states};
use crate::config::ToolbarConfig;
use leptos::logging::{log, warn};

/// Everything the toolbar needs from the surface it floats over.
pub trait EditorHost: FormattingCapability + Prompter {
    type Node: ClassList;
    type Selection: SelectionSource<Node = Self::Node> + BlockSurgery<Node = Self::Node>;

    fn current_selection(&self) -> Option<Self::Selection>;

    /// The toolbar's own rendered size, if it is rendered yet.
    fn toolbar_size(&self) -> Option<Size>;
}

// Emitted towards the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    EditingChanged(bool),
    // A block transformation mutated the document.
    Format,
}

pub struct FormatToolbar<H: EditorHost> {
    host: H,
    config: ToolbarConfig,
    buttons: Vec<FormattingOption>,
    context: SelectionContext<H::Node>,
    // Last value sent out as EditingChanged; only used to detect changes.
    reported_editing: bool,
    geometry: Option<ToolbarGeometry>,
    last_command: Option<String>,
    frames: FrameQueue,
}

impl<H: EditorHost> FormatToolbar<H> {
    pub fn new(host: H, config: ToolbarConfig) -> Self {
        let buttons = expand(&config.options);
        Self {
            host,
            config,
            buttons,
            context: SelectionContext::empty(),
            reported_editing: false,
            geometry: None,
            last_command: None,
            frames: FrameQueue::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn buttons(&self) -> &[FormattingOption] {
        &self.buttons
    }

    pub fn context(&self) -> &SelectionContext<H::Node> {
        &self.context
    }

    // Always derived, there is no setter.
    pub fn editing(&self) -> bool {
        self.context.non_empty()
    }

    pub fn geometry(&self) -> Option<ToolbarGeometry> {
        self.geometry
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    pub fn has_pending_frame(&self) -> bool {
        !self.frames.is_empty()
    }

    // Replacing the option list regenerates every button.
    pub fn reconfigure<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.options = options.into_iter().map(Into::into).collect();
        self.buttons = expand(&self.config.options);
    }

    pub fn handle_selection_change(&mut self) -> Vec<Notification> {
        let selection = self.host.current_selection();
        let context = selection.as_ref().map(classify).unwrap_or_default();
        let notifications = self.replace_context(context).into_iter().collect();

        // Without a range the previous geometry stays put.
        if let Some(selection_box) = selection.as_ref().and_then(|s| s.bounding_box())
            && let Some(toolbar_box) = self.host.toolbar_size()
        {
            self.geometry = Some(position(selection_box, toolbar_box, self.config.gap));
        }
        notifications
    }

    pub fn button_states(&self) -> Vec<ButtonState> {
        button_states(&self.buttons, &self.context, &self.host)
    }

    pub fn activate(&mut self, id: &str) -> Vec<Notification> {
        let Some(option) = self.buttons.iter().find(|b| b.id == id).cloned() else {
            log!("ignoring unconfigured toolbar command {id:?}");
            return Vec::new();
        };

        let notifications = match option.category {
            Category::Inline => {
                if !self.host.execute(&option.name, None) {
                    log!("host rejected {}", option.name);
                }
                Vec::new()
            }
            Category::Block => self.toggle_block(&option.name),
            Category::Link => {
                let outcome = apply_link(
                    &self.context,
                    &mut self.host,
                    &self.config.link_prompt,
                    &self.config.link_placeholder,
                );
                log!("link: {outcome:?}");
                Vec::new()
            }
        };

        self.frames.push(FrameTask::RecordLastCommand(option.id));
        notifications
    }

    // Runs the work deferred by `activate`; call once per animation frame.
    pub fn run_frame(&mut self) {
        for task in self.frames.drain() {
            match task {
                FrameTask::RecordLastCommand(id) => self.last_command = Some(id),
            }
        }
    }

    fn toggle_block(&mut self, command: &str) -> Vec<Notification> {
        let mut notifications = Vec::new();
        let Some(mut selection) = self.host.current_selection() else {
            return notifications;
        };

        // The document may have changed since the last selection signal.
        let context = classify(&selection);
        match apply_block(command, &context, &mut selection) {
            Ok(outcome) => {
                if let Some(node) = outcome.node()
                    && self.config.resync_scoped_classes
                {
                    resync_scoped_classes(node);
                }
                if outcome.mutated() {
                    notifications.push(Notification::Format);
                }
            }
            Err(err) => warn!("{command} not applied: {err}"),
        }

        selection.clear();
        // Nothing from before the surgery may stay referenced.
        notifications.extend(self.replace_context(SelectionContext::empty()));
        notifications
    }

    fn replace_context(&mut self, context: SelectionContext<H::Node>) -> Option<Notification> {
        self.context = context;
        let editing = self.editing();
        if editing == self.reported_editing {
            return None;
        }
        self.reported_editing = editing;
        Some(Notification::EditingChanged(editing))
    }
}
