//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod persona_repository;

pub use persona_repository::{PersonaRepository, PersonaStore};

#[cfg(test)]
pub use persona_repository::MockPersonaRepository;
