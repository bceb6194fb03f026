use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::parse_optional_instant;

/// Public mint window as published upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMint {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Raw mint fields of a collection, exactly as the data source sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInput {
    /// Advisory lifecycle hint ("live", "upcoming", ...)
    pub status: String,
    pub mint_start_date: Option<String>,
    pub public_mint: Option<PublicMint>,
    /// Integer as text
    pub total_minted: String,
    /// Integer as text
    pub max_supply: String,
}

impl StatusInput {
    /// Mint start: `mint_start_date` when it parses, else the public mint start.
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        parse_optional_instant(self.mint_start_date.as_deref()).or_else(|| {
            parse_optional_instant(
                self.public_mint
                    .as_ref()
                    .and_then(|pm| pm.start_date.as_deref()),
            )
        })
    }

    /// Mint end from the public mint window.
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        parse_optional_instant(
            self.public_mint
                .as_ref()
                .and_then(|pm| pm.end_date.as_deref()),
        )
    }
}

/// A collection as listed on the mint and collection pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    /// Creator wallet address
    pub creator: String,
    /// Decimal amount as text
    pub mint_price: String,
    #[serde(flatten)]
    pub mint: StatusInput,
}
