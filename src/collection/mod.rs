//! Mint lifecycle status for collection and mint pages.

mod format;
mod model;
mod status;

pub use format::{format_date, format_distance, UNKNOWN_DATE};
pub use model::{Collection, PublicMint, StatusInput};
pub use status::{
    resolve_status, resolve_status_at, resolve_status_with, CollectionStatus, MintPhase,
    StatusColor,
};
