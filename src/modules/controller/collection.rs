// src/modules/controller/collection.rs
//
// The generic fetch → cache → render half of the sync cycle, shared by every
// resource kind on both pages.

use crate::modules::cache::CacheSlot;
use crate::modules::controller::confirm::ConfirmPrompt;
use crate::modules::notify::{Notifier, ToastLevel};
use crate::modules::records::Resource;
use crate::modules::table::application::ports::outgoing::{ListQuery, TableStore};

/// Forced re-fetch of one collection. The slot is replaced as a unit on
/// success; a failed list fetch degrades silently to the Failed slot state
/// (the page renders as if no data exists).
pub async fn refresh_slot<T, S>(slot: &mut CacheSlot<T>, store: &S, query: ListQuery)
where
    T: Resource,
    S: TableStore<T>,
{
    match store.list(query).await {
        Ok(page) => slot.replace(page.data),
        Err(error) => {
            tracing::warn!(table = T::TABLE, %error, "list fetch failed, degrading to empty");
            slot.mark_failed();
        }
    }
}

/// Confirmation-gated delete. An unconfirmed delete issues no call at all.
/// Returns true when the backend committed the delete, so the caller can
/// force the re-fetch.
pub async fn delete_record<T, S, C, N>(
    store: &S,
    id: &str,
    noun: &str,
    prompt: &C,
    notifier: &N,
) -> bool
where
    T: Resource,
    S: TableStore<T>,
    C: ConfirmPrompt,
    N: Notifier,
{
    if !prompt.confirm(&format!("Are you sure you want to delete this {}?", noun)) {
        return false;
    }

    match TableStore::<T>::delete(store, id).await {
        Ok(()) => {
            notifier.notify(
                ToastLevel::Success,
                &format!("{} deleted successfully!", capitalize(noun)),
            );
            true
        }
        Err(error) => {
            tracing::warn!(table = T::TABLE, %error, "delete failed");
            notifier.notify(ToastLevel::Error, &format!("Failed to delete {}", noun));
            false
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
