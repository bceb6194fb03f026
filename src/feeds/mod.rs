pub mod shutdown;
pub mod ticker;
