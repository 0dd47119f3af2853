//! Delete use case - existence-gated removal.

use std::sync::Arc;

use crate::domain::PersonaId;
use crate::errors::AppResult;
use crate::infra::PersonaRepository;

/// Use case: delete a persona by id.
pub struct DeletePersona {
    repository: Arc<dyn PersonaRepository>,
}

impl DeletePersona {
    pub fn new(repository: Arc<dyn PersonaRepository>) -> Self {
        Self { repository }
    }

    /// Validate the id, check existence, then delete.
    ///
    /// Returns `false` when the persona does not exist; a non-positive id is
    /// a validation error, not a "not found". The check and the delete are
    /// two repository calls, so a concurrent writer may slip between them;
    /// any stronger guarantee belongs to the storage layer.
    pub async fn execute(&self, id: i32) -> AppResult<bool> {
        let persona_id = PersonaId::new(id)?;

        if !self.repository.exists_by_id(persona_id).await? {
            return Ok(false);
        }

        self.repository.delete_by_id(persona_id).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::errors::AppError;
    use crate::infra::repositories::MockPersonaRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_delete_existing_returns_true() {
        let id = PersonaId::new(5).unwrap();
        let mut repo = MockPersonaRepository::new();
        repo.expect_exists_by_id()
            .with(eq(id))
            .returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeletePersona::new(Arc::new(repo));
        assert!(use_case.execute(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false_without_deleting() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().times(0);

        let use_case = DeletePersona::new(Arc::new(repo));
        assert!(!use_case.execute(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_id_fails_before_existence_check() {
        let mut repo = MockPersonaRepository::new();
        repo.expect_exists_by_id().times(0);
        repo.expect_delete_by_id().times(0);

        let use_case = DeletePersona::new(Arc::new(repo));
        for bad in [0, -1] {
            let err = use_case.execute(bad).await.unwrap_err();
            assert!(matches!(err, AppError::Domain(DomainError::InvalidId)));
        }
    }
}
