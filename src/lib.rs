//! thingstore - a data-access layer for things
//!
//! A thing has a store-assigned numeric id, a shape and a color. This library
//! exposes create, read and delete operations over things plus exact-match
//! lookups by shape and by color, backed by SQLite through SeaORM.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity model for the things table
//! * [`repositories`] - The access contract and its query layer
//! * [`storage`] - SQLite-backed implementation of the contract
//! * [`logger`] - Log dispatch setup

/// Configuration module for database and logging settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup for the binary and embedding hosts
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer backed by SQLite
pub mod storage;

pub use entities::{Thing, ThingDraft, ThingId};
pub use repositories::{MemoryThingRepository, RepositoryError, ThingRepository, ThingRepositoryExt};
pub use storage::LocalStorage;
