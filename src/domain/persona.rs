//! Persona aggregate root.

use serde::Serialize;

use crate::config::{MAX_APELLIDO_LEN, MAX_DIRECCION_LEN, MAX_NOMBRE_LEN};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::{Email, PersonaId, Telefono};

/// Persona domain entity.
///
/// The identity is absent until the persistence layer assigns one on save.
/// All string fields are trimmed and bounds-checked at construction and on
/// every mutation; the email and phone fields carry their own invariants as
/// value objects.
#[derive(Debug, Clone)]
pub struct Persona {
    id: Option<PersonaId>,
    nombre: String,
    apellido: String,
    email: Email,
    telefono: Telefono,
    direccion: String,
}

impl Persona {
    /// Create a not-yet-persisted persona (no identity).
    pub fn new(
        nombre: &str,
        apellido: &str,
        email: Email,
        telefono: Telefono,
        direccion: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: None,
            nombre: validate_field(nombre, "nombre", MAX_NOMBRE_LEN)?,
            apellido: validate_field(apellido, "apellido", MAX_APELLIDO_LEN)?,
            email,
            telefono,
            direccion: validate_field(direccion, "direccion", MAX_DIRECCION_LEN)?,
        })
    }

    /// Reconstruct a persisted persona (identity known).
    pub fn with_id(
        id: PersonaId,
        nombre: &str,
        apellido: &str,
        email: Email,
        telefono: Telefono,
        direccion: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            id: Some(id),
            nombre: validate_field(nombre, "nombre", MAX_NOMBRE_LEN)?,
            apellido: validate_field(apellido, "apellido", MAX_APELLIDO_LEN)?,
            email,
            telefono,
            direccion: validate_field(direccion, "direccion", MAX_DIRECCION_LEN)?,
        })
    }

    /// Replace name, surname and address as one group, re-validating each.
    pub fn update_personal_info(
        &mut self,
        nombre: &str,
        apellido: &str,
        direccion: &str,
    ) -> DomainResult<()> {
        let nombre = validate_field(nombre, "nombre", MAX_NOMBRE_LEN)?;
        let apellido = validate_field(apellido, "apellido", MAX_APELLIDO_LEN)?;
        let direccion = validate_field(direccion, "direccion", MAX_DIRECCION_LEN)?;
        // No partial mutation: assign only after all three validate
        self.nombre = nombre;
        self.apellido = apellido;
        self.direccion = direccion;
        Ok(())
    }

    /// Replace the email address.
    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Replace the phone number.
    pub fn change_telefono(&mut self, telefono: Telefono) {
        self.telefono = telefono;
    }

    /// Derived `nombre apellido` form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }

    pub fn id(&self) -> Option<PersonaId> {
        self.id
    }

    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    pub fn apellido(&self) -> &str {
        &self.apellido
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn telefono(&self) -> &Telefono {
        &self.telefono
    }

    pub fn direccion(&self) -> &str {
        &self.direccion
    }
}

/// Equality and hashing are by identity only. Two personas with the same id
/// are equal regardless of other fields; a persona without an id is never
/// equal to anything, itself included.
impl PartialEq for Persona {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl std::hash::Hash for Persona {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_field(value: &str, field: &'static str, max: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::blank(field));
    }
    if trimmed.chars().count() > max {
        return Err(DomainError::too_long(field, max));
    }
    Ok(trimmed.to_string())
}

/// Persona response (safe to return to clients).
#[derive(Debug, Clone, Serialize)]
pub struct PersonaResponse {
    /// Assigned identifier
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    /// Normalized email
    pub email: String,
    /// Cleaned phone number
    pub telefono: String,
    pub direccion: String,
    /// Derived `nombre apellido`
    pub nombre_completo: String,
}

impl From<&Persona> for PersonaResponse {
    fn from(persona: &Persona) -> Self {
        Self {
            id: persona.id().map(|id| id.value()).unwrap_or_default(),
            nombre: persona.nombre().to_string(),
            apellido: persona.apellido().to_string(),
            email: persona.email().value().to_string(),
            telefono: persona.telefono().value().to_string(),
            direccion: persona.direccion().to_string(),
            nombre_completo: persona.full_name(),
        }
    }
}

impl From<Persona> for PersonaResponse {
    fn from(persona: Persona) -> Self {
        PersonaResponse::from(&persona)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Persona {
        Persona::new(
            "Juan",
            "Pérez",
            Email::new("juan.perez@email.com").unwrap(),
            Telefono::new("1234567890").unwrap(),
            "Calle Principal 123",
        )
        .unwrap()
    }

    #[test]
    fn test_new_persona_has_no_id() {
        let persona = sample();
        assert!(persona.id().is_none());
        assert_eq!(persona.full_name(), "Juan Pérez");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let persona = Persona::new(
            "  Juan  ",
            " Pérez ",
            Email::new("juan.perez@email.com").unwrap(),
            Telefono::new("1234567890").unwrap(),
            "  Calle Principal 123 ",
        )
        .unwrap();
        assert_eq!(persona.nombre(), "Juan");
        assert_eq!(persona.apellido(), "Pérez");
        assert_eq!(persona.direccion(), "Calle Principal 123");
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let email = Email::new("a@b.co").unwrap();
        let tel = Telefono::new("1234567").unwrap();
        assert_eq!(
            Persona::new("  ", "Pérez", email.clone(), tel.clone(), "Calle 1").unwrap_err(),
            DomainError::blank("nombre")
        );
        assert_eq!(
            Persona::new("Juan", "", email.clone(), tel.clone(), "Calle 1").unwrap_err(),
            DomainError::blank("apellido")
        );
        assert_eq!(
            Persona::new("Juan", "Pérez", email, tel, " ").unwrap_err(),
            DomainError::blank("direccion")
        );
    }

    #[test]
    fn test_overlong_fields_are_rejected() {
        let email = Email::new("a@b.co").unwrap();
        let tel = Telefono::new("1234567").unwrap();
        let long = "x".repeat(46);
        assert_eq!(
            Persona::new(&long, "Pérez", email.clone(), tel.clone(), "Calle 1").unwrap_err(),
            DomainError::too_long("nombre", MAX_NOMBRE_LEN)
        );
        let long_dir = "x".repeat(101);
        assert_eq!(
            Persona::new("Juan", "Pérez", email, tel, &long_dir).unwrap_err(),
            DomainError::too_long("direccion", MAX_DIRECCION_LEN)
        );
    }

    #[test]
    fn test_update_personal_info_replaces_group() {
        let mut persona = sample();
        persona
            .update_personal_info("Carlos", "García", "Avenida 9 #45")
            .unwrap();
        assert_eq!(persona.nombre(), "Carlos");
        assert_eq!(persona.apellido(), "García");
        assert_eq!(persona.direccion(), "Avenida 9 #45");
        // Untouched fields survive
        assert_eq!(persona.email().value(), "juan.perez@email.com");
        assert_eq!(persona.telefono().value(), "1234567890");
    }

    #[test]
    fn test_update_personal_info_validates_before_mutating() {
        let mut persona = sample();
        let err = persona.update_personal_info("Carlos", " ", "Avenida 9").unwrap_err();
        assert_eq!(err, DomainError::blank("apellido"));
        // Nothing changed, including the fields that were individually valid
        assert_eq!(persona.nombre(), "Juan");
        assert_eq!(persona.direccion(), "Calle Principal 123");
    }

    #[test]
    fn test_change_email_and_telefono() {
        let mut persona = sample();
        persona.change_email(Email::new("nuevo@email.com").unwrap());
        persona.change_telefono(Telefono::new("0987654321").unwrap());
        assert_eq!(persona.email().value(), "nuevo@email.com");
        assert_eq!(persona.telefono().value(), "0987654321");
    }

    #[test]
    fn test_equality_is_by_identity() {
        let id = PersonaId::new(1).unwrap();
        let a = Persona::with_id(
            id,
            "Juan",
            "Pérez",
            Email::new("a@b.co").unwrap(),
            Telefono::new("1234567").unwrap(),
            "Calle 1",
        )
        .unwrap();
        let b = Persona::with_id(
            id,
            "Otro",
            "Nombre",
            Email::new("c@d.co").unwrap(),
            Telefono::new("7654321").unwrap(),
            "Calle 2",
        )
        .unwrap();
        assert_eq!(a, b);

        let unsaved = sample();
        assert_ne!(a, unsaved);
        // An identity-less persona is not even equal to a clone of itself
        assert_ne!(unsaved, unsaved.clone());
    }

    #[test]
    fn test_response_mapping() {
        let id = PersonaId::new(3).unwrap();
        let persona = Persona::with_id(
            id,
            "Juan",
            "Pérez",
            Email::new("juan.perez@email.com").unwrap(),
            Telefono::new("1234567890").unwrap(),
            "Calle Principal 123",
        )
        .unwrap();
        let response = PersonaResponse::from(&persona);
        assert_eq!(response.id, 3);
        assert_eq!(response.nombre_completo, "Juan Pérez");
        assert_eq!(response.telefono, "1234567890");
    }
}
