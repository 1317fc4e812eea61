pub mod http_table_store;

pub use http_table_store::HttpTableStore;
