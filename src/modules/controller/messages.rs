// src/modules/controller/messages.rs

use serde_json::json;

use crate::modules::notify::{Notifier, ToastLevel};
use crate::modules::records::Message;
use crate::modules::table::application::ports::outgoing::TableStore;

/// Unread-badge count for the admin sidebar.
pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

/// Mark a message read: one combined PATCH flipping `read` and `status`
/// together, never two calls. Returns true when the backend committed, so the
/// caller forces the re-fetch.
pub async fn mark_as_read<S, N>(store: &S, notifier: &N, id: &str) -> bool
where
    S: TableStore<Message>,
    N: Notifier,
{
    let fields = json!({ "read": true, "status": "read" });
    match store.patch(id, fields).await {
        Ok(_) => {
            notifier.notify(ToastLevel::Success, "Message marked as read");
            true
        }
        Err(error) => {
            tracing::warn!(message_id = id, %error, "mark as read failed");
            notifier.notify(ToastLevel::Error, "Failed to update message");
            false
        }
    }
}
