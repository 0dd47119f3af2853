//! Application service - façade over the persona use cases.

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    CreatePersona, CreatePersonaCommand, DeletePersona, GetPersonas, UpdatePersona,
    UpdatePersonaCommand,
};
use crate::domain::Persona;
use crate::errors::AppResult;
use crate::infra::PersonaRepository;

/// Persona service trait for dependency injection.
///
/// The single entry point for adapters; each method builds the matching
/// use-case command from primitives and returns the use-case result
/// unchanged.
#[async_trait]
pub trait PersonaService: Send + Sync {
    /// Create and persist a new persona
    async fn create_persona(
        &self,
        nombre: String,
        apellido: String,
        email: String,
        telefono: String,
        direccion: String,
    ) -> AppResult<Persona>;

    /// List every persona
    async fn list_personas(&self) -> AppResult<Vec<Persona>>;

    /// Get one persona by id (None when absent)
    async fn get_persona(&self, id: i32) -> AppResult<Option<Persona>>;

    /// Search by nombre (partial, case-insensitive)
    async fn search_by_nombre(&self, nombre: &str) -> AppResult<Vec<Persona>>;

    /// Search by apellido (partial, case-insensitive)
    async fn search_by_apellido(&self, apellido: &str) -> AppResult<Vec<Persona>>;

    /// Partially update a persona (None when absent)
    async fn update_persona(
        &self,
        id: i32,
        nombre: Option<String>,
        apellido: Option<String>,
        email: Option<String>,
        telefono: Option<String>,
        direccion: Option<String>,
    ) -> AppResult<Option<Persona>>;

    /// Delete a persona (false when absent)
    async fn delete_persona(&self, id: i32) -> AppResult<bool>;
}

/// Concrete implementation owning the four use cases.
///
/// Stateless beyond the use-case references, constructed once over the
/// repository port at startup.
pub struct PersonaManager {
    create: CreatePersona,
    get: GetPersonas,
    update: UpdatePersona,
    delete: DeletePersona,
}

impl PersonaManager {
    /// Wire all use cases over a shared repository port.
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self {
            create: CreatePersona::new(repository.clone()),
            get: GetPersonas::new(repository.clone()),
            update: UpdatePersona::new(repository.clone()),
            delete: DeletePersona::new(repository),
        }
    }
}

#[async_trait]
impl PersonaService for PersonaManager {
    async fn create_persona(
        &self,
        nombre: String,
        apellido: String,
        email: String,
        telefono: String,
        direccion: String,
    ) -> AppResult<Persona> {
        self.create
            .execute(CreatePersonaCommand {
                nombre,
                apellido,
                email,
                telefono,
                direccion,
            })
            .await
    }

    async fn list_personas(&self) -> AppResult<Vec<Persona>> {
        self.get.all().await
    }

    async fn get_persona(&self, id: i32) -> AppResult<Option<Persona>> {
        self.get.by_id(id).await
    }

    async fn search_by_nombre(&self, nombre: &str) -> AppResult<Vec<Persona>> {
        self.get.by_nombre(nombre).await
    }

    async fn search_by_apellido(&self, apellido: &str) -> AppResult<Vec<Persona>> {
        self.get.by_apellido(apellido).await
    }

    async fn update_persona(
        &self,
        id: i32,
        nombre: Option<String>,
        apellido: Option<String>,
        email: Option<String>,
        telefono: Option<String>,
        direccion: Option<String>,
    ) -> AppResult<Option<Persona>> {
        self.update
            .execute(UpdatePersonaCommand {
                id,
                nombre,
                apellido,
                email,
                telefono,
                direccion,
            })
            .await
    }

    async fn delete_persona(&self, id: i32) -> AppResult<bool> {
        self.delete.execute(id).await
    }
}
