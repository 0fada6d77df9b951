//! Storage abstractions for service layer
//!
//! In-memory key-value maps with the same surface: one guarded by a single
//! mutex, one sharded by key hash. Every method is one critical section.

pub mod memory_map_store;
pub mod sharded_map_store;

pub use memory_map_store::MemoryMapStore;
pub use sharded_map_store::ShardedMapStore;
