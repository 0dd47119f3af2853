//! Domain layer - Core business entities and value objects.
//!
//! This module contains the core domain model independent of infrastructure
//! concerns. Validation is fail-fast: no value object or entity can be
//! observed in an invalid state.

pub mod email;
pub mod error;
pub mod persona;
pub mod persona_id;
pub mod telefono;

pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use persona::{Persona, PersonaResponse};
pub use persona_id::PersonaId;
pub use telefono::Telefono;
