pub mod table_store;

pub use table_store::{ListQuery, Page, TableStore, TableStoreError};
