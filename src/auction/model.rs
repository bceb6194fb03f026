use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarketError;
use crate::parse::parse_amount;

/// Lifecycle state assigned by the data source. Never derived locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Upcoming,
    Active,
    Ended,
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionStatus {
    type Err = MarketError;

    /// Exact, case-sensitive match on the lowercase wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "active" => Ok(Self::Active),
            "ended" => Ok(Self::Ended),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(MarketError::UnknownStatus(other.to_string())),
        }
    }
}

/// A single bid on an auction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    /// Bidder wallet address
    pub bidder: String,
    /// Decimal amount as text (e.g. "0.42")
    pub amount: String,
    pub placed_at: DateTime<Utc>,
}

/// An auction listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    pub id: String,
    pub title: String,
    /// Seller wallet address
    pub seller: String,
    pub status: AuctionStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Decimal amount as text. Parsed only for comparisons.
    pub current_bid: String,
    /// Newest first
    pub bids: Vec<Bid>,
}

impl Auction {
    /// Numeric value of `current_bid`, or `None` if it does not parse.
    pub fn current_bid_amount(&self) -> Option<Decimal> {
        parse_amount(&self.current_bid)
    }

    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sample() -> Auction {
        let start = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        Auction {
            id: "auction-1".to_string(),
            title: "Glitch Cat #12".to_string(),
            seller: "0xabc".to_string(),
            status: AuctionStatus::Active,
            start_time: start,
            end_time: start + chrono::Duration::days(2),
            current_bid: "0.75".to_string(),
            bids: vec![Bid {
                bidder: "0xdef".to_string(),
                amount: "0.75".to_string(),
                placed_at: start + chrono::Duration::hours(3),
            }],
        }
    }

    #[test]
    fn test_status_from_str_exact() {
        assert_eq!("active".parse::<AuctionStatus>().unwrap(), AuctionStatus::Active);
        assert_eq!("cancelled".parse::<AuctionStatus>().unwrap(), AuctionStatus::Cancelled);
        // No fuzzy or case-insensitive matching
        assert!("Active".parse::<AuctionStatus>().is_err());
        assert!("live".parse::<AuctionStatus>().is_err());
    }

    #[test]
    fn test_current_bid_amount() {
        let mut auction = sample();
        assert_eq!(auction.current_bid_amount(), Some(dec!(0.75)));

        auction.current_bid = "n/a".to_string();
        assert_eq!(auction.current_bid_amount(), None);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["status"], "active");
        assert_eq!(json["currentBid"], "0.75");
        assert_eq!(json["bids"][0]["placedAt"], "2026-10-17T03:00:00Z");
        assert!(json.get("startTime").is_some());
        assert!(json.get("endTime").is_some());

        let back: Auction = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
