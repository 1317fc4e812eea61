pub mod admin;
pub mod site;

pub use admin::AdminPage;
pub use site::SitePage;
