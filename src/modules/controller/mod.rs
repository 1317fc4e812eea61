pub mod collection;
pub mod confirm;
pub mod editor;
pub mod messages;
pub mod pager;

pub use collection::{delete_record, refresh_slot};
pub use confirm::{AlwaysConfirm, ConfirmPrompt};
pub use editor::{Editor, EditorState};
pub use pager::Pager;
