//! SQLite storage implementation for Bytebank.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the store trait defined in `bytebank-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The account repository
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! `core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain + service)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod accounts;

// Re-export database utilities
pub use db::{
    connect, create_pool, get_connection, init, run_migrations, DbConnection, DbPool,
};

pub use config::StorageConfig;

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from bytebank-core for convenience
pub use bytebank_core::errors::{DatabaseError, Error, Result};
