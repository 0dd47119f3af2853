//! Create use case - validates input and persists a new persona.

use std::sync::Arc;

use crate::domain::{Email, Persona, Telefono};
use crate::errors::AppResult;
use crate::infra::PersonaRepository;

/// Input data for creating a persona, all raw primitives.
#[derive(Debug, Clone)]
pub struct CreatePersonaCommand {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
}

/// Use case: create and persist a new persona.
pub struct CreatePersona {
    repository: Arc<dyn PersonaRepository>,
}

impl CreatePersona {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    /// Build the value objects and entity, then delegate to the repository.
    ///
    /// Any validation failure aborts before the single `save` call, so a
    /// failed create never persists anything.
    pub async fn execute(&self, command: CreatePersonaCommand) -> AppResult<Persona> {
        let email = Email::new(&command.email)?;
        let telefono = Telefono::new(&command.telefono)?;

        let persona = Persona::new(
            &command.nombre,
            &command.apellido,
            email,
            telefono,
            &command.direccion,
        )?;

        self.repository.save(&persona).await
    }
}
