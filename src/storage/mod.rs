//! Record store implementations for different backends

pub mod in_memory;
#[cfg(feature = "remote")]
pub mod rest;

pub use in_memory::InMemoryRecordStore;
#[cfg(feature = "remote")]
pub use rest::RestRecordStore;
