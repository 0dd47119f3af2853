//! Persona repository: persistence port and its SeaORM adapter.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::persona::{self, ActiveModel, Entity as PersonaEntity};
use crate::domain::{Persona, PersonaId};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Persistence contract consumed by the use cases.
///
/// Implementations define row ordering for the listing operations; the
/// application layer performs no sorting of its own.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PersonaRepository: Send + Sync {
    /// Persist a new persona and return it with its assigned identity
    async fn save(&self, persona: &Persona) -> AppResult<Persona>;

    /// Persist changes to an already-identified persona
    async fn update(&self, persona: &Persona) -> AppResult<Persona>;

    /// Find a persona by its identifier
    async fn find_by_id(&self, id: PersonaId) -> AppResult<Option<Persona>>;

    /// Fetch every persona
    async fn find_all(&self) -> AppResult<Vec<Persona>>;

    /// Remove a persona by its identifier
    async fn delete_by_id(&self, id: PersonaId) -> AppResult<()>;

    /// Check whether a persona with the given identifier exists
    async fn exists_by_id(&self, id: PersonaId) -> AppResult<bool>;

    /// Case-insensitive partial match on nombre
    async fn find_by_nombre_containing(&self, nombre: &str) -> AppResult<Vec<Persona>>;

    /// Case-insensitive partial match on apellido
    async fn find_by_apellido_containing(&self, apellido: &str) -> AppResult<Vec<Persona>>;
}

/// Concrete implementation of PersonaRepository over SeaORM
pub struct PersonaStore {
    db: DatabaseConnection,
}

impl PersonaStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn into_domain(model: persona::Model) -> AppResult<Persona> {
        let id = model.id;
        Persona::try_from(model)
            .map_err(|e| AppError::internal(format!("invalid persona row {}: {}", id, e)))
    }

    fn collect_domain(models: Vec<persona::Model>) -> AppResult<Vec<Persona>> {
        models.into_iter().map(Self::into_domain).collect()
    }

    async fn find_containing(
        &self,
        column: persona::Column,
        needle: &str,
    ) -> AppResult<Vec<Persona>> {
        let pattern = format!("%{}%", needle.to_lowercase());
        let models = PersonaEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Self::collect_domain(models)
    }
}

#[async_trait]
impl PersonaRepository for PersonaStore {
    async fn save(&self, persona: &Persona) -> AppResult<Persona> {
        let active: ActiveModel = persona.into();
        let model = active.insert(&self.db).await.map_err(AppError::from)?;
        Self::into_domain(model)
    }

    async fn update(&self, persona: &Persona) -> AppResult<Persona> {
        if persona.id().is_none() {
            return Err(AppError::internal("cannot update a persona without an id"));
        }

        let active: ActiveModel = persona.into();
        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Self::into_domain(model)
    }

    async fn find_by_id(&self, id: PersonaId) -> AppResult<Option<Persona>> {
        let result = PersonaEntity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Self::into_domain).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Persona>> {
        let models = PersonaEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Self::collect_domain(models)
    }

    async fn delete_by_id(&self, id: PersonaId) -> AppResult<()> {
        PersonaEntity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: PersonaId) -> AppResult<bool> {
        let result = PersonaEntity::find_by_id(id.value())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.is_some())
    }

    async fn find_by_nombre_containing(&self, nombre: &str) -> AppResult<Vec<Persona>> {
        self.find_containing(persona::Column::Nombre, nombre).await
    }

    async fn find_by_apellido_containing(&self, apellido: &str) -> AppResult<Vec<Persona>> {
        self.find_containing(persona::Column::Apellido, apellido).await
    }
}
