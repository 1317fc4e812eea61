pub mod animation;
pub mod cache;
pub mod controller;
pub mod notify;
pub mod records;
pub mod render;
pub mod table;
pub mod timer;
