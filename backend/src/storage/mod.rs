//! # Storage Module
//!
//! Holds the example records. The only backend today is an in-memory store
//! seeded at startup; state is lost on restart. Domain code depends on the
//! [`ExampleStorage`] trait rather than the concrete store.

pub mod memory;
pub mod traits;

pub use memory::InMemoryExampleStore;
pub use traits::ExampleStorage;
