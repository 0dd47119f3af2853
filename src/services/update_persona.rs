//! Update use case - partial updates against an existing persona.

use std::sync::Arc;

use crate::domain::{Email, Persona, PersonaId, Telefono};
use crate::errors::AppResult;
use crate::infra::PersonaRepository;

/// Partial-update input: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdatePersonaCommand {
    pub id: i32,
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

/// Use case: partially update a persona, re-validating every changed field.
pub struct UpdatePersona {
    repository: Arc<dyn PersonaRepository>,
}

impl UpdatePersona {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    /// Look up the persona, apply the supplied fields and persist.
    ///
    /// Returns `None` for an unknown id. Name, surname and address travel
    /// through the combined personal-info update whenever any of the three
    /// is supplied, with omitted members defaulting to their current values;
    /// email and telefono are independent replacements, applied only when
    /// supplied non-blank. Any validation failure aborts the whole update.
    pub async fn execute(&self, command: UpdatePersonaCommand) -> AppResult<Option<Persona>> {
        let persona_id = PersonaId::new(command.id)?;

        let Some(mut persona) = self.repository.find_by_id(persona_id).await? else {
            return Ok(None);
        };

        if command.nombre.is_some() || command.apellido.is_some() || command.direccion.is_some() {
            let nombre = command.nombre.as_deref().unwrap_or(persona.nombre()).to_string();
            let apellido = command
                .apellido
                .as_deref()
                .unwrap_or(persona.apellido())
                .to_string();
            let direccion = command
                .direccion
                .as_deref()
                .unwrap_or(persona.direccion())
                .to_string();
            persona.update_personal_info(&nombre, &apellido, &direccion)?;
        }

        if let Some(email) = command.email.as_deref().filter(|e| !e.trim().is_empty()) {
            persona.change_email(Email::new(email)?);
        }

        if let Some(telefono) = command.telefono.as_deref().filter(|t| !t.trim().is_empty()) {
            persona.change_telefono(Telefono::new(telefono)?);
        }

        let updated = self.repository.update(&persona).await?;
        Ok(Some(updated))
    }
}
