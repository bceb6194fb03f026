use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::AuctionStatus;
use crate::error::MarketError;

/// Inclusive bounds on the numeric value of `current_bid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// `min <= amount <= max`. An unparseable amount is never contained.
    pub fn contains(&self, amount: Option<Decimal>) -> bool {
        match amount {
            Some(value) => self.min <= value && value <= self.max,
            None => false,
        }
    }
}

/// Result ordering for the auction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Active auctions by end time ascending, everything else after
    EndingSoon,
    /// Start time descending
    NewlyListed,
    /// Current bid descending
    HighestBid,
    /// Bid count descending
    MostBids,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndingSoon => "ending_soon",
            Self::NewlyListed => "newly_listed",
            Self::HighestBid => "highest_bid",
            Self::MostBids => "most_bids",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ending_soon" => Ok(Self::EndingSoon),
            "newly_listed" => Ok(Self::NewlyListed),
            "highest_bid" => Ok(Self::HighestBid),
            "most_bids" => Ok(Self::MostBids),
            other => Err(MarketError::UnknownSort(other.to_string())),
        }
    }
}

/// What to show in the auction list. A plain value: applying it never
/// touches the auctions it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionFilter {
    /// Keep only this lifecycle state
    pub status: Option<AuctionStatus>,
    /// Keep only bids inside this range
    pub price_range: Option<PriceRange>,
    /// `None` keeps the filtered order as is
    pub sort_by: Option<SortBy>,
}

impl Default for AuctionFilter {
    fn default() -> Self {
        Self {
            status: None,
            price_range: None,
            sort_by: Some(SortBy::EndingSoon),
        }
    }
}

impl AuctionFilter {
    /// Filter with no constraints and no sort.
    pub fn unsorted() -> Self {
        Self {
            sort_by: None,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: AuctionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Set the sort from its wire name. Unknown names clear the sort,
    /// which leaves results in filter order.
    pub fn sorted_by_name(mut self, name: &str) -> Self {
        self.sort_by = match name.parse() {
            Ok(sort_by) => Some(sort_by),
            Err(e) => {
                tracing::warn!(error = %e, "keeping filter order");
                None
            }
        };
        self
    }
}
