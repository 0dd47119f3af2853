//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repository port and its sea-orm adapter

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{PersonaRepository, PersonaStore};
