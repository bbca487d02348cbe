//! Storage layer abstraction.
//!
//! Two pieces make up the layer:
//! - Engines implementing [`KeyValueBackend`]: filesystem (one JSON file per
//!   named store instance) and in-memory (tests, ephemeral use)
//! - The typed [`Store`] facade layered on top, which serde-encodes values
//!   into the raw JSON contract

pub mod filesystem;
pub mod memory;
pub mod store;
pub mod traits;

pub use filesystem::FilesystemBackend;
pub use memory::MemoryBackend;
pub use store::Store;
pub use traits::{EntryVisitor, KeyValueBackend};
