//! Auction list queries: status and price filtering plus the list sorts.

mod filter;
mod model;
mod query;

pub use filter::{AuctionFilter, PriceRange, SortBy};
pub use model::{Auction, AuctionStatus, Bid};
pub use query::{query_auctions, status_counts, StatusCounts};
