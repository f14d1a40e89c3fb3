//! # REST API Interface Layer
//!
//! HTTP endpoints over the example service. This layer only translates:
//! JSON DTOs from the `shared` crate in and out, request validation, and
//! mapping of absent results and storage failures onto status codes.

pub mod error;
pub mod example_apis;
pub mod health_apis;
pub mod mappers;

pub use error::ApiError;
