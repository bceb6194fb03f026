use serde::Serialize;
use std::cmp::Reverse;

use super::filter::{AuctionFilter, SortBy};
use super::model::{Auction, AuctionStatus};

/// Per-status totals for the list tabs. Always computed over the full,
/// unfiltered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub upcoming: usize,
    pub ended: usize,
}

/// Count auctions per tab.
pub fn status_counts(auctions: &[Auction]) -> StatusCounts {
    auctions
        .iter()
        .fold(StatusCounts::default(), |mut counts, auction| {
            match auction.status {
                AuctionStatus::Active => counts.active += 1,
                AuctionStatus::Upcoming => counts.upcoming += 1,
                AuctionStatus::Ended => counts.ended += 1,
                AuctionStatus::Cancelled => {}
            }
            counts
        })
}

/// Filter and order auctions for display.
///
/// Steps, in order:
/// 1. keep auctions whose status equals `filter.status`, if set
/// 2. keep auctions whose parsed `current_bid` lies in `filter.price_range`,
///    if set (unparseable bids are dropped)
/// 3. sort by `filter.sort_by` (stable), or leave as is when unset
///
/// Returns references into `auctions`, which is left untouched.
pub fn query_auctions<'a>(auctions: &'a [Auction], filter: &AuctionFilter) -> Vec<&'a Auction> {
    let mut result: Vec<&Auction> = auctions
        .iter()
        .filter(|a| filter.status.map_or(true, |status| a.status == status))
        .filter(|a| {
            filter
                .price_range
                .map_or(true, |range| range.contains(a.current_bid_amount()))
        })
        .collect();

    if let Some(sort_by) = filter.sort_by {
        sort_auctions(&mut result, sort_by);
    }

    tracing::debug!(
        input = auctions.len(),
        output = result.len(),
        sort_by = ?filter.sort_by,
        "queried auctions"
    );

    result
}

fn sort_auctions(auctions: &mut [&Auction], sort_by: SortBy) {
    match sort_by {
        // Non-active auctions share one key, so they keep input order
        SortBy::EndingSoon => {
            auctions.sort_by_key(|a| (!a.is_active(), a.is_active().then_some(a.end_time)))
        }
        SortBy::NewlyListed => auctions.sort_by_key(|a| Reverse(a.start_time)),
        SortBy::HighestBid => auctions.sort_by_cached_key(|a| {
            let amount = a.current_bid_amount();
            (amount.is_none(), Reverse(amount))
        }),
        SortBy::MostBids => auctions.sort_by_key(|a| Reverse(a.bid_count())),
    }
}
