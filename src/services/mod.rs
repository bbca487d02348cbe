//! Service layer.
//!
//! Services own the in-memory state and sit between the CLI and the storage
//! layer.

pub mod watchlist;

pub use watchlist::{MOVIES_KEY, WatchlistService};
