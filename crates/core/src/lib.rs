//! Bytebank Core - account domain models, business rules and storage contracts.
//!
//! This crate is database-agnostic. It defines the account store contract
//! (`AccountRepositoryTrait`) and the service that enforces the account rules
//! on top of it. The `storage-sqlite` crate provides the persistent
//! implementation of the store.

pub mod accounts;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
