//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, schema setup and the reset-on-start policy
//! - SQLite pragma configuration
//! - Fixed sample-data seeding
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
