//! Pet request handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};

use pethub_core::models::pet::{Pet, PetFields, PetFilter};
use pethub_core::pets;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::handlers::auth::StatusResponse;

/// `GET /pets/{id}` — fetch a single pet by id.
pub async fn get_pet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Pet>> {
    let pet = pets::get(&state.store, &id).await?;
    Ok(Json(pet))
}

/// `GET /pets` — list pets matching the query filter.
pub async fn list_pets_handler(
    State(state): State<AppState>,
    filter: Result<Query<PetFilter>, QueryRejection>,
) -> AppResult<Json<Vec<Pet>>> {
    let Query(filter) = filter.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let pets = pets::list(&state.store, &filter).await?;
    Ok(Json(pets))
}

/// `POST /admin/pets` — create a pet.
pub async fn create_pet_handler(
    State(state): State<AppState>,
    body: Result<Json<Pet>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Json(pet) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    pets::create(&state.store, &pet).await?;
    Ok(Json(StatusResponse {
        status: "pet created".into(),
    }))
}

/// `PUT /admin/pets/{id}` — replace the mutable fields of a pet.
pub async fn update_pet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PetFields>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Json(fields) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    pets::update(&state.store, &id, &fields).await?;
    Ok(Json(StatusResponse {
        status: "pet updated".into(),
    }))
}

/// `DELETE /admin/pets/{id}` — delete a pet.
pub async fn delete_pet_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<StatusResponse>> {
    pets::delete(&state.store, &id).await?;
    Ok(Json(StatusResponse {
        status: "pet deleted".into(),
    }))
}
