//! # Domain Module
//!
//! Business logic for the example records, independent of the HTTP layer and
//! of the storage backend.
//!
//! - **models**: the `Example` record and its invariants
//! - **commands**: inputs and results of service operations
//! - **example_service**: list/get/create/update/delete/search

pub mod commands;
pub mod example_service;
pub mod models;

pub use commands::*;
pub use example_service::*;
