// src/modules/render/bindings.rs
//
// Declarative event-delegation table. Views emit bindings next to markup
// instead of inline handler attributes or globally attached functions; the
// page dispatches the `Action` when the host reports the event.

use crate::modules::render::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

/// Every user interaction either page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSkillFilter(Filter),
    SetProjectFilter(Filter),
    SetMessageFilter(Filter),
    LoadMoreProjects,
    SubmitContact,
    SaveProfile,
    NewSkill,
    EditSkill(String),
    DeleteSkill(String),
    NewProject,
    EditProject(String),
    DeleteProject(String),
    NewTestimonial,
    EditTestimonial(String),
    DeleteTestimonial(String),
    MarkMessageRead(String),
    DeleteMessage(String),
    CloseModal,
    PrevTestimonial,
    NextTestimonial,
    GoToTestimonial(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Element identity (the `id` attribute of the bound element).
    pub target: String,
    pub event: EventKind,
    pub action: Action,
}

impl Binding {
    pub fn click(target: impl Into<String>, action: Action) -> Self {
        Self {
            target: target.into(),
            event: EventKind::Click,
            action,
        }
    }

    pub fn submit(target: impl Into<String>, action: Action) -> Self {
        Self {
            target: target.into(),
            event: EventKind::Submit,
            action,
        }
    }
}

/// Markup plus the event table for the elements in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub markup: super::markup::Node,
    pub bindings: Vec<Binding>,
}

impl View {
    pub fn new(markup: super::markup::Node) -> Self {
        Self {
            markup,
            bindings: Vec::new(),
        }
    }

    pub fn with_bindings(markup: super::markup::Node, bindings: Vec<Binding>) -> Self {
        Self { markup, bindings }
    }

    /// Look up the action bound to (element, event), if any.
    pub fn action_for(&self, target: &str, event: EventKind) -> Option<&Action> {
        self.bindings
            .iter()
            .find(|b| b.target == target && b.event == event)
            .map(|b| &b.action)
    }
}
