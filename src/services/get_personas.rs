//! Read use cases - listing, lookup and search.

use std::sync::Arc;

use crate::domain::{Persona, PersonaId};
use crate::errors::AppResult;
use crate::infra::PersonaRepository;

/// Use case: read-only persona queries.
pub struct GetPersonas {
    repository: Arc<dyn PersonaRepository>,
}

impl GetPersonas {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    /// Every persona, in repository order.
    pub async fn all(&self) -> AppResult<Vec<Persona>> {
        self.repository.find_all().await
    }

    /// Lookup by id. Fails for non-positive ids; an absent persona is
    /// `None`, never an error.
    pub async fn by_id(&self, id: i32) -> AppResult<Option<Persona>> {
        let persona_id = PersonaId::new(id)?;
        self.repository.find_by_id(persona_id).await
    }

    /// Partial, case-insensitive match on nombre. Blank input short-circuits
    /// to an empty result without querying the repository.
    pub async fn by_nombre(&self, nombre: &str) -> AppResult<Vec<Persona>> {
        if nombre.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.repository.find_by_nombre_containing(nombre.trim()).await
    }

    /// Partial, case-insensitive match on apellido, same blank-input rule.
    pub async fn by_apellido(&self, apellido: &str) -> AppResult<Vec<Persona>> {
        if apellido.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.repository
            .find_by_apellido_containing(apellido.trim())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Email, Telefono};
    use crate::errors::AppError;
    use crate::infra::repositories::MockPersonaRepository;
    use mockall::predicate::eq;

    fn persona(id: i32, nombre: &str) -> Persona {
        Persona::with_id(
            PersonaId::new(id).unwrap(),
            nombre,
            "Pérez",
            Email::new("juan.perez@email.com").unwrap(),
            Telefono::new("1234567890").unwrap(),
            "Calle Principal 123",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_all_returns_repository_order() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![persona(2, "Zoe"), persona(1, "Ana")]));

        let use_case = GetPersonas::new(Arc::new(repo));
        let personas = use_case.all().await.unwrap();

        // No application-level sort
        assert_eq!(personas[0].id().unwrap().value(), 2);
        assert_eq!(personas[1].id().unwrap().value(), 1);
    }

    #[tokio::test]
    async fn test_by_id_found() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_id()
            .with(eq(PersonaId::new(1).unwrap()))
            .returning(|id| Ok(Some(persona(id.value(), "Juan"))));

        let use_case = GetPersonas::new(Arc::new(repo));
        let result = use_case.by_id(1).await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn test_by_id_absent_is_none_not_error() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetPersonas::new(Arc::new(repo));
        assert!(use_case.by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_by_id_rejects_non_positive() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_id().times(0);

        let use_case = GetPersonas::new(Arc::new(repo));
        let err = use_case.by_id(0).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvalidId)));
    }

    #[tokio::test]
    async fn test_blank_nombre_search_skips_repository() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_nombre_containing().times(0);

        let use_case = GetPersonas::new(Arc::new(repo));
        assert!(use_case.by_nombre("   ").await.unwrap().is_empty());
        assert!(use_case.by_nombre("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nombre_search_trims_input() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_nombre_containing()
            .withf(|nombre| nombre == "juan")
            .times(1)
            .returning(|_| Ok(vec![persona(1, "Juan")]));

        let use_case = GetPersonas::new(Arc::new(repo));
        let personas = use_case.by_nombre("  juan  ").await.unwrap();
        assert_eq!(personas.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_apellido_search_skips_repository() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_find_by_apellido_containing().times(0);

        let use_case = GetPersonas::new(Arc::new(repo));
        assert!(use_case.by_apellido(" ").await.unwrap().is_empty());
    }
}
