//! Application services layer - Use cases and business logic.
//!
//! Each use case is a single business operation orchestrating validation
//! and persistence through the repository port. The `PersonaService` façade
//! aggregates them as the entry point for adapters.

mod create_persona;
mod delete_persona;
mod get_personas;
mod persona_service;
mod update_persona;

pub use create_persona::{CreatePersona, CreatePersonaCommand};
pub use delete_persona::DeletePersona;
pub use get_personas::GetPersonas;
pub use persona_service::{PersonaManager, PersonaService};
pub use update_persona::{UpdatePersona, UpdatePersonaCommand};
