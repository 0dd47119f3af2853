//! Persona handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::state::AppState;
use crate::domain::PersonaResponse;
use crate::errors::{AppError, AppResult};

/// Persona creation request with validation
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonaRequest {
    #[validate(length(min = 1, max = 45, message = "nombre must be 1-45 characters"))]
    pub nombre: String,
    #[validate(length(min = 1, max = 45, message = "apellido must be 1-45 characters"))]
    pub apellido: String,
    #[validate(length(min = 1, max = 45, message = "email must be 1-45 characters"))]
    pub email: String,
    #[validate(length(min = 1, message = "telefono is required"))]
    pub telefono: String,
    #[validate(length(min = 1, max = 100, message = "direccion must be 1-100 characters"))]
    pub direccion: String,
}

/// Persona update request; all fields optional for partial updates
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonaRequest {
    #[validate(length(max = 45, message = "nombre cannot exceed 45 characters"))]
    pub nombre: Option<String>,
    #[validate(length(max = 45, message = "apellido cannot exceed 45 characters"))]
    pub apellido: Option<String>,
    #[validate(length(max = 45, message = "email cannot exceed 45 characters"))]
    pub email: Option<String>,
    pub telefono: Option<String>,
    #[validate(length(max = 100, message = "direccion cannot exceed 100 characters"))]
    pub direccion: Option<String>,
}

/// Query parameters for the nombre search endpoint
#[derive(Debug, Deserialize)]
pub struct NombreQuery {
    pub nombre: String,
}

/// Query parameters for the apellido search endpoint
#[derive(Debug, Deserialize)]
pub struct ApellidoQuery {
    pub apellido: String,
}

/// Create persona routes
pub fn persona_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_personas).post(create_persona))
        .route(
            "/:id",
            get(get_persona).put(update_persona).delete(delete_persona),
        )
        .route("/buscar/nombre", get(search_by_nombre))
        .route("/buscar/apellido", get(search_by_apellido))
}

/// List all personas
pub async fn list_personas(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PersonaResponse>>> {
    tracing::info!("Listing all personas");
    let personas = state.personas.list_personas().await?;
    Ok(Json(personas.iter().map(PersonaResponse::from).collect()))
}

/// Get persona by ID
pub async fn get_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PersonaResponse>> {
    tracing::info!("Fetching persona with id {}", id);
    let persona = state
        .personas
        .get_persona(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(PersonaResponse::from(persona)))
}

/// Create a new persona
pub async fn create_persona(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePersonaRequest>,
) -> AppResult<(StatusCode, Json<PersonaResponse>)> {
    tracing::info!("Creating persona {} {}", payload.nombre, payload.apellido);
    let persona = state
        .personas
        .create_persona(
            payload.nombre,
            payload.apellido,
            payload.email,
            payload.telefono,
            payload.direccion,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(PersonaResponse::from(persona))))
}

/// Partially update an existing persona
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePersonaRequest>,
) -> AppResult<Json<PersonaResponse>> {
    tracing::info!("Updating persona with id {}", id);
    let persona = state
        .personas
        .update_persona(
            id,
            payload.nombre,
            payload.apellido,
            payload.email,
            payload.telefono,
            payload.direccion,
        )
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(PersonaResponse::from(persona)))
}

/// Delete a persona
pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    tracing::info!("Deleting persona with id {}", id);
    if state.personas.delete_persona(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

/// Search personas by nombre (partial match)
pub async fn search_by_nombre(
    State(state): State<AppState>,
    Query(query): Query<NombreQuery>,
) -> AppResult<Json<Vec<PersonaResponse>>> {
    tracing::info!("Searching personas by nombre: {}", query.nombre);
    let personas = state.personas.search_by_nombre(&query.nombre).await?;
    Ok(Json(personas.iter().map(PersonaResponse::from).collect()))
}

/// Search personas by apellido (partial match)
pub async fn search_by_apellido(
    State(state): State<AppState>,
    Query(query): Query<ApellidoQuery>,
) -> AppResult<Json<Vec<PersonaResponse>>> {
    tracing::info!("Searching personas by apellido: {}", query.apellido);
    let personas = state.personas.search_by_apellido(&query.apellido).await?;
    Ok(Json(personas.iter().map(PersonaResponse::from).collect()))
}
