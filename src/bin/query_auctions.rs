//! One-shot auction list query over the mock market, printed as JSON.
//!
//! Usage: query_auctions [sort_by] [status]

use anyhow::Result;
use serde_json::json;

use nftmarket_rs::auction::{query_auctions, status_counts, AuctionFilter, AuctionStatus};
use nftmarket_rs::clock::{Clock, SystemClock};
use nftmarket_rs::config::Config;
use nftmarket_rs::logging;
use nftmarket_rs::mock::MockMarket;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::load_or_default(Config::path_from_env())?;
    logging::init(&cfg.general.log_level);

    let mut args = std::env::args().skip(1);
    let mut filter = cfg.query.to_filter()?;
    if let Some(sort_by) = args.next() {
        filter = filter.sorted_by_name(&sort_by);
    }
    if let Some(status) = args.next() {
        filter.status = Some(status.parse::<AuctionStatus>()?);
    }

    let auctions = MockMarket::seeded(cfg.mock.seed).auctions(cfg.mock.auctions, SystemClock.now());
    let result = query_auctions(&auctions, &filter);

    let output = json!({
        "filter": describe(&filter),
        "counts": status_counts(&auctions),
        "auctions": result,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn describe(filter: &AuctionFilter) -> serde_json::Value {
    json!({
        "status": filter.status,
        "sortBy": filter.sort_by,
        "priceRange": filter
            .price_range
            .map(|r| [r.min.to_string(), r.max.to_string()]),
    })
}
