// src/modules/controller/editor.rs

use crate::modules::notify::{Notifier, ToastLevel};
use crate::modules::records::Resource;
use crate::modules::table::application::ports::outgoing::TableStore;

/// Modal editing state machine for one mutable resource kind.
///
/// Idle (list displayed) → Editing (modal open, draft filled) →
/// Submitting (request in flight, submit control disabled) → Idle on success,
/// or back to Editing with the draft intact on failure.
#[derive(Debug, Clone)]
pub enum EditorState<T> {
    Idle,
    Editing { draft: T },
    Submitting { draft: T },
}

pub struct Editor<T: Resource> {
    state: EditorState<T>,
    noun: &'static str,
}

impl<T: Resource> Editor<T> {
    pub fn new(noun: &'static str) -> Self {
        Self {
            state: EditorState::Idle,
            noun,
        }
    }

    /// Open the modal with a blank draft ("Add ...").
    pub fn open_blank(&mut self)
    where
        T: Default,
    {
        self.state = EditorState::Editing { draft: T::default() };
    }

    /// Open the modal pre-filled from an existing record ("Edit ...").
    pub fn open(&mut self, record: T) {
        self.state = EditorState::Editing { draft: record };
    }

    /// Close the modal without saving. Ignored while a submit is in flight.
    pub fn cancel(&mut self) {
        if !matches!(self.state, EditorState::Submitting { .. }) {
            self.state = EditorState::Idle;
        }
    }

    pub fn state(&self) -> &EditorState<T> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, EditorState::Idle)
    }

    /// The submit control is disabled exactly while the request is in flight.
    pub fn submit_disabled(&self) -> bool {
        matches!(self.state, EditorState::Submitting { .. })
    }

    pub fn draft(&self) -> Option<&T> {
        match &self.state {
            EditorState::Idle => None,
            EditorState::Editing { draft } | EditorState::Submitting { draft } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            EditorState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    /// Submit the current draft: update when it has an id, create otherwise.
    /// Returns true on success so the caller can force the list re-fetch; the
    /// backend must have committed before anything re-renders.
    pub async fn submit<S, N>(&mut self, store: &S, notifier: &N) -> bool
    where
        S: TableStore<T>,
        N: Notifier,
    {
        let draft = match std::mem::replace(&mut self.state, EditorState::Idle) {
            EditorState::Editing { draft } => draft,
            other => {
                self.state = other;
                return false;
            }
        };
        self.state = EditorState::Submitting {
            draft: draft.clone(),
        };

        let result = match draft.id() {
            Some(id) => {
                let id = id.to_string();
                store.update(&id, &draft).await
            }
            None => store.create(&draft).await,
        };

        match result {
            Ok(_) => {
                self.state = EditorState::Idle;
                notifier.notify(
                    ToastLevel::Success,
                    &format!("{} saved successfully!", self.noun),
                );
                true
            }
            Err(error) => {
                tracing::warn!(table = T::TABLE, %error, "save failed");
                self.state = EditorState::Editing { draft };
                notifier.notify(ToastLevel::Error, &format!("Failed to save {}", self.noun));
                false
            }
        }
    }
}
