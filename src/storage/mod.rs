//! Local storage module for thing persistence
//!
//! This module provides database operations using SeaORM for things:
//! - Connection setup and schema bootstrap (`db`)
//! - The repository operations over that connection (`things`)

pub mod db;
pub mod things;

pub use db::LocalStorage;
