use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::auction::{Auction, AuctionStatus, Bid};

/// Smallest price unit used by the generator.
const PRICE_UNIT: Decimal = dec!(0.001);

const MAX_BIDS: usize = 8;

pub(super) fn generate(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> Auction {
    let status = match rng.gen_range(0..10) {
        0..=4 => AuctionStatus::Active,
        5..=6 => AuctionStatus::Upcoming,
        7..=8 => AuctionStatus::Ended,
        _ => AuctionStatus::Cancelled,
    };

    let hours = |rng: &mut StdRng, lo: i64, hi: i64| TimeDelta::hours(rng.gen_range(lo..hi));
    let (start_time, end_time) = match status {
        AuctionStatus::Active => (now - hours(rng, 1, 72), now + hours(rng, 1, 168)),
        AuctionStatus::Upcoming => {
            let start = now + hours(rng, 1, 72);
            (start, start + hours(rng, 24, 168))
        }
        AuctionStatus::Ended => {
            let end = now - hours(rng, 1, 240);
            (end - hours(rng, 24, 168), end)
        }
        AuctionStatus::Cancelled => {
            let start = now - hours(rng, 1, 100);
            (start, start + hours(rng, 24, 168))
        }
    };

    let reserve = PRICE_UNIT * Decimal::from(rng.gen_range(10..2000));
    let bid_count = match status {
        AuctionStatus::Upcoming => 0,
        _ => rng.gen_range(0..=MAX_BIDS),
    };

    // Built oldest first with rising amounts, then flipped to newest first
    let window_end = end_time.min(now);
    let span = (window_end - start_time).num_seconds().max(1);
    let mut amount = reserve;
    let mut bids: Vec<Bid> = (0..bid_count)
        .map(|k| {
            amount += PRICE_UNIT * Decimal::from(rng.gen_range(5..200));
            let offset = span * (k as i64 + 1) / (bid_count as i64 + 1);
            Bid {
                bidder: super::wallet(rng),
                amount: amount.normalize().to_string(),
                placed_at: start_time + TimeDelta::seconds(offset),
            }
        })
        .collect();
    bids.reverse();

    let current_bid = bids
        .first()
        .map(|b| b.amount.clone())
        .unwrap_or_else(|| reserve.normalize().to_string());

    Auction {
        id: format!("auction-{}", index + 1),
        title: format!("{} #{}", super::name(rng), rng.gen_range(1..10_000)),
        seller: super::wallet(rng),
        status,
        start_time,
        end_time,
        current_bid,
        bids,
    }
}
