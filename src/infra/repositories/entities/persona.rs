//! Persona database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{DomainError, Email, Persona, PersonaId, Telefono};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "personas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub direccion: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fallible: rows written by this application always satisfy the domain
/// invariants, but the conversion re-validates rather than trusting storage.
impl TryFrom<Model> for Persona {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Persona::with_id(
            PersonaId::new(model.id)?,
            &model.nombre,
            &model.apellido,
            Email::new(&model.email)?,
            Telefono::new(&model.telefono)?,
            &model.direccion,
        )
    }
}

impl From<&Persona> for ActiveModel {
    fn from(persona: &Persona) -> Self {
        use sea_orm::ActiveValue::{NotSet, Set};

        Self {
            id: persona.id().map(|id| Set(id.value())).unwrap_or(NotSet),
            nombre: Set(persona.nombre().to_string()),
            apellido: Set(persona.apellido().to_string()),
            email: Set(persona.email().value().to_string()),
            telefono: Set(persona.telefono().value().to_string()),
            direccion: Set(persona.direccion().to_string()),
        }
    }
}
