//! Wiring & DI. Entry point: load config, bootstrap the feed source, run the reader, print a digest.
//! No business logic here; extraction lives in the domain and paging in FeedReaderService.

use dotenv::dotenv;
use hygge_feed::adapters::export::articles_to_csv;
use hygge_feed::adapters::fs::FsFeedSource;
use hygge_feed::domain::WeightMap;
use hygge_feed::ports::FeedSourcePort;
use hygge_feed::shared::config::AppConfig;
use hygge_feed::usecases::FeedReaderService;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let feed_dir = PathBuf::from(cfg.feed_dir_or_default());
    let policy = cfg.pagination_policy_or_default();
    info!(path = %feed_dir.display(), ?policy, "feed directory");

    // --- Source + reader ---
    let source: Arc<dyn FeedSourcePort> = Arc::new(FsFeedSource::new(&feed_dir, policy));
    let reader = FeedReaderService::new(source, cfg.max_pages_or_default());
    let digest = reader
        .read()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // --- Report ---
    println!("Pages read: {}", digest.pages_read);
    println!("Items: {}", digest.total_items());
    for (media_type, n) in &digest.media_type_counts {
        println!("  {:<10} {}", media_type, n);
    }
    println!("Articles:");
    for article in &digest.articles {
        println!(
            "  [{}] {} ({})",
            article.base.id, article.base.title, article.news_source.name
        );
    }
    if let Some(cursor) = &digest.next_cursor {
        println!("More pages available after cursor {}", cursor);
    }
    println!("Interaction weights:");
    for (interaction_type, weight) in WeightMap::CANONICAL.iter() {
        println!("  {:<10} {}", interaction_type, weight);
    }

    // --- Optional CSV export ---
    if let Some(path) = &cfg.export_csv {
        let csv = articles_to_csv(&digest.article_refs())?;
        tokio::fs::write(path, csv)
            .await
            .map_err(|e| anyhow::anyhow!("write {}: {}", path, e))?;
        info!(path = %path, articles = digest.articles.len(), "exported articles");
    }

    Ok(())
}
