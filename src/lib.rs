//! Auction list queries and mint status derivation for an NFT marketplace,
//! plus seeded mock data to drive them.

pub mod auction;
pub mod clock;
pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod feeds;
pub mod logging;
pub mod mock;
pub mod parse;
pub mod watch;

pub use auction::{query_auctions, status_counts, Auction, AuctionFilter, AuctionStatus, SortBy};
pub use clock::{Clock, FixedClock, SystemClock};
pub use collection::{resolve_status, resolve_status_at, Collection, CollectionStatus, StatusInput};
pub use error::{MarketError, MarketResult};
