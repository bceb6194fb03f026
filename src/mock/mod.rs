//! Seeded mock data for demos and tests.
//!
//! Everything is generated on request from a caller-supplied seed and
//! "now", so two runs with the same inputs see identical data.

mod auctions;
mod collections;

use chrono::{DateTime, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::auction::Auction;
use crate::collection::Collection;

const ADJECTIVES: [&str; 10] = [
    "Cosmic", "Pixel", "Neon", "Glitch", "Lunar", "Feral", "Velvet", "Chrome", "Quiet", "Solar",
];

const NOUNS: [&str; 10] = [
    "Apes", "Foxes", "Golems", "Koi", "Ravens", "Sprites", "Owls", "Whales", "Moths", "Dragons",
];

/// Factory for mock marketplace data.
pub struct MockMarket {
    rng: StdRng,
}

impl MockMarket {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` auctions whose statuses agree with their times at `now`.
    pub fn auctions(&mut self, count: usize, now: DateTime<Utc>) -> Vec<Auction> {
        (0..count)
            .map(|i| auctions::generate(&mut self.rng, i, now))
            .collect()
    }

    /// Generate `count` collections cycling through every mint phase.
    pub fn collections(&mut self, count: usize, now: DateTime<Utc>) -> Vec<Collection> {
        (0..count)
            .map(|i| collections::generate(&mut self.rng, i, now))
            .collect()
    }
}

fn wallet(rng: &mut StdRng) -> String {
    format!("0x{:040x}", rng.gen::<u128>())
}

fn name(rng: &mut StdRng) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Plain");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Tokens");
    format!("{} {}", adjective, noun)
}

fn timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
