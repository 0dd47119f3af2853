//! Persona API - Single-entity CRUD service with hexagonal architecture.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Persona aggregate and value objects (Email, Telefono, PersonaId)
//! - **services**: Use cases and the application service façade
//! - **infra**: Database, migrations and the repository port/adapter
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Email, Persona, PersonaId, Telefono};
pub use errors::{AppError, AppResult};
