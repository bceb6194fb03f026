use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::auction::{AuctionFilter, AuctionStatus, PriceRange};
use crate::error::{MarketError, MarketResult};

/// Environment variable that overrides the config file path.
pub const CONFIG_PATH_ENV: &str = "NFTMARKET_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: General,
    pub mock: MockConfig,
    pub query: QueryConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct General {
    pub log_level: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Sizing of the generated demo data.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    pub seed: u64,
    pub auctions: usize,
    pub collections: usize,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            auctions: 24,
            collections: 10,
        }
    }
}

/// Auction list filter, in wire names.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl QueryConfig {
    /// Build the filter. Unknown statuses and bad prices are rejected; an
    /// unknown sort only logs a warning and leaves results unsorted.
    pub fn to_filter(&self) -> MarketResult<AuctionFilter> {
        let mut filter = AuctionFilter::default();

        if let Some(status) = &self.status {
            filter.status = Some(AuctionStatus::from_str(status)?);
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            let min = parse_price("min_price", self.min_price.as_deref())?.unwrap_or(Decimal::MIN);
            let max = parse_price("max_price", self.max_price.as_deref())?.unwrap_or(Decimal::MAX);
            filter.price_range = Some(PriceRange::new(min, max));
        }

        if let Some(sort_by) = &self.sort_by {
            filter = filter.sorted_by_name(sort_by);
        }

        Ok(filter)
    }
}

fn parse_price(field: &'static str, value: Option<&str>) -> MarketResult<Option<Decimal>> {
    value
        .map(|v| {
            Decimal::from_str(v.trim()).map_err(|_| MarketError::InvalidPrice {
                field,
                value: v.to_string(),
            })
        })
        .transpose()
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Seconds between status refreshes
    pub tick_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { tick_secs: 1 }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> MarketResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MarketError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> MarketResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(contents: &str) -> MarketResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Config path from the environment, else the default.
    pub fn path_from_env() -> String {
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }
}
