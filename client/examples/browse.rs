//! Catalog list page
//!
//! Fetches the catalog, applies an optional search term and jumps to a page.
//!
//! Usage: cargo run --example browse -- [SEARCH] [PAGE] [LIMIT]

use std::env;

use anyhow::Result;
use dexter_client::{CatalogView, ClientConfig, DexClient};
use dexter_dex::CatalogConfig;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_page(view: &CatalogView) {
    if !view.search_term().is_empty() {
        println!("Search: {:?}", view.search_term());
    }

    for entry in view.visible_entries() {
        println!(
            "  #{:<5} {:<24} {}",
            entry.id,
            entry.name,
            entry.sprite_url.as_deref().unwrap_or("-")
        );
    }

    let previous = if view.can_go_previous() { "[Previous]" } else { " Previous " };
    let next = if view.can_go_next() { "[Next]" } else { " Next " };
    println!(
        "{}  page {} of {}  {}",
        previous,
        view.current_page(),
        view.total_pages(),
        next
    );
    println!("\n© 2024 Made with ❤️");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let mut args = env::args().skip(1);
    let search = args.next().unwrap_or_default();
    let page: usize = args.next().and_then(|p| p.parse().ok()).unwrap_or(1);
    let limit: u32 = args.next().and_then(|l| l.parse().ok()).unwrap_or(151);

    let client = DexClient::new(ClientConfig::default().with_catalog_limit(limit))?;
    let mut view = CatalogView::new(CatalogConfig::default());

    if !client.refresh_catalog(&mut view).await {
        anyhow::bail!("Catalog unavailable");
    }

    view.set_search_term(&search);
    while view.current_page() < page && view.next_page() {}

    print_page(&view);
    Ok(())
}
