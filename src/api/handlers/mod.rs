//! HTTP request handlers.

mod health_handler;
mod persona_handler;

pub use health_handler::health_routes;
pub use persona_handler::{persona_routes, CreatePersonaRequest, UpdatePersonaRequest};
