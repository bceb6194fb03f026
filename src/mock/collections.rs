use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::timestamp;
use crate::collection::{Collection, PublicMint, StatusInput};

const SUPPLIES: [i64; 5] = [100, 500, 1_000, 5_555, 10_000];

const MINT_PRICE_STEP: Decimal = dec!(0.01);

/// Mint shapes, picked round-robin so every phase shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Upcoming,
    Live,
    SoldOut,
    Ended,
    Undated,
}

const SHAPES: [Shape; 5] = [
    Shape::Upcoming,
    Shape::Live,
    Shape::SoldOut,
    Shape::Ended,
    Shape::Undated,
];

pub(super) fn generate(rng: &mut StdRng, index: usize, now: DateTime<Utc>) -> Collection {
    let shape = SHAPES[index % SHAPES.len()];
    let max_supply = SUPPLIES.choose(rng).copied().unwrap_or(1_000);
    let hours = |rng: &mut StdRng, lo: i64, hi: i64| TimeDelta::hours(rng.gen_range(lo..hi));

    let (hint, window, minted) = match shape {
        Shape::Upcoming => {
            let start = now + hours(rng, 1, 240);
            ("upcoming", Some((start, start + hours(rng, 24, 336))), 0)
        }
        Shape::Live => {
            let start = now - hours(rng, 1, 72);
            let minted = rng.gen_range(0..max_supply);
            ("live", Some((start, now + hours(rng, 1, 336))), minted)
        }
        Shape::SoldOut => {
            let start = now - hours(rng, 1, 72);
            ("live", Some((start, now + hours(rng, 1, 336))), max_supply)
        }
        Shape::Ended => {
            let end = now - hours(rng, 1, 720);
            let minted = rng.gen_range(0..max_supply);
            ("ended", Some((end - hours(rng, 24, 336), end)), minted)
        }
        Shape::Undated => ("draft", None, 0),
    };

    // Alternate where the start date lives, as upstream data does
    let (mint_start_date, public_mint) = match window {
        Some((start, end)) if index % 2 == 0 => (
            Some(timestamp(start)),
            PublicMint {
                start_date: None,
                end_date: Some(timestamp(end)),
            },
        ),
        Some((start, end)) => (
            None,
            PublicMint {
                start_date: Some(timestamp(start)),
                end_date: Some(timestamp(end)),
            },
        ),
        None => (None, PublicMint::default()),
    };

    Collection {
        id: format!("collection-{}", index + 1),
        name: super::name(rng),
        creator: super::wallet(rng),
        mint_price: (MINT_PRICE_STEP * Decimal::from(rng.gen_range(1..50)))
            .normalize()
            .to_string(),
        mint: StatusInput {
            status: hint.to_string(),
            mint_start_date,
            public_mint: Some(public_mint),
            total_minted: minted.to_string(),
            max_supply: max_supply.to_string(),
        },
    }
}
