pub mod modules;
pub mod pages;

#[cfg(test)]
mod tests;

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::table::adapter::outgoing::http_table_store::HttpTableStore;
use crate::pages::SitePage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let base_url = env::var("API_BASE_URL").expect("API_BASE_URL is not set in .env file");
    info!(%base_url, "fetching portfolio data");

    let store = HttpTableStore::new(&base_url);
    let mut page = SitePage::new(store);
    page.load_all().await;

    let view = page.render();
    println!("{}", view.markup.to_html());

    Ok(())
}
