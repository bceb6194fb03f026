use std::time::Duration;
use tokio::sync::mpsc;

use nftmarket_rs::auction::{query_auctions, status_counts};
use nftmarket_rs::clock::{Clock, SystemClock};
use nftmarket_rs::collection::resolve_status_at;
use nftmarket_rs::config::Config;
use nftmarket_rs::events::Event;
use nftmarket_rs::feeds::{shutdown, ticker};
use nftmarket_rs::logging;
use nftmarket_rs::mock::MockMarket;
use nftmarket_rs::watch::StatusWatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load_or_default(Config::path_from_env())?;
    logging::init(&cfg.general.log_level);
    tracing::debug!(?cfg, "loaded config");

    let clock = SystemClock;
    let now = clock.now();

    // Generate the mock market for this session
    let mut market = MockMarket::seeded(cfg.mock.seed);
    let auctions = market.auctions(cfg.mock.auctions, now);
    let collections = market.collections(cfg.mock.collections, now);

    // Auction list
    let counts = status_counts(&auctions);
    tracing::info!(
        active = counts.active,
        upcoming = counts.upcoming,
        ended = counts.ended,
        "auction tabs"
    );

    let filter = cfg.query.to_filter()?;
    for auction in query_auctions(&auctions, &filter) {
        tracing::info!(
            id = %auction.id,
            title = %auction.title,
            status = %auction.status,
            current_bid = %auction.current_bid,
            bids = auction.bid_count(),
            ends = %auction.end_time,
            "auction"
        );
    }

    // Collection statuses
    for collection in &collections {
        let status = resolve_status_at(&collection.mint, now);
        tracing::info!(
            id = %collection.id,
            name = %collection.name,
            status = %status.status_text,
            color = status.status_color.as_str(),
            minted_percent = ?status.minted_percent,
            "collection"
        );
    }

    // Create the event channel
    let (tx, mut rx) = mpsc::channel::<Event>(16);
    let feeds = [
        ticker::spawn(tx.clone(), Duration::from_secs(cfg.watch.tick_secs.max(1))),
        shutdown::spawn(tx),
    ];

    let mut watcher = StatusWatcher::new();
    watcher.observe(&collections, &clock);

    tracing::info!("watching mint phases... (Ctrl+C to quit)");
    while let Some(event) = rx.recv().await {
        match event {
            Event::Tick => {
                for change in watcher.observe(&collections, &clock) {
                    tracing::info!(
                        id = %change.collection_id,
                        from = ?change.from,
                        to = %change.to,
                        "mint phase changed"
                    );
                }
            }
            Event::Shutdown => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    for feed in feeds {
        feed.abort();
    }

    Ok(())
}
