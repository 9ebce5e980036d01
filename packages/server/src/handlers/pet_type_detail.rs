use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::pet_type_detail::*;
use crate::pet_type_detail::{DetailListRequest, pet_type_detail_service};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/pet-type-details",
    tag = "Pet Type Details",
    operation_id = "createPetTypeDetail",
    summary = "Create pet type details",
    description = "Stores temperament, length and weight for a pet type. The new record is not linked to a pet type: `petTypeId` and `petTypeName` in the body are accepted but ignored. Link it afterwards with PATCH or PUT.",
    request_body = PetTypeDetailView,
    responses(
        (status = 201, description = "Details created", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(temperament = %payload.temperament))]
pub async fn create_pet_type_detail(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PetTypeDetailView>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    validate_create_detail(&payload)?;

    pet_type_detail_service(&state).create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Pet type is created")),
    ))
}

#[utoipa::path(
    get,
    path = "/pet-type-details",
    tag = "Pet Type Details",
    operation_id = "listPetTypeDetails",
    summary = "List pet type details",
    description = "Returns one page of details. `name` keeps only entries whose pet type name contains it (case-insensitive); the filter runs on the fetched page, so `totalElements` counts the filtered page rather than the whole table. Sortable by `id` (default), `petType`, `temperament`, `length`, `weight` and `createdAt`.",
    params(PetTypeDetailListQuery),
    responses(
        (status = 200, description = "One page of details", body = Page<PetTypeDetailView>),
        (status = 400, description = "Bad page size or sort field (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query), fields(name = ?query.name))]
pub async fn list_pet_type_details(
    State(state): State<AppState>,
    Query(query): Query<PetTypeDetailListQuery>,
) -> Result<Json<Page<PetTypeDetailView>>, AppError> {
    let request = DetailListRequest::try_from(query)?;
    let page = pet_type_detail_service(&state).list(&request).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/pet-type-details/{id}",
    tag = "Pet Type Details",
    operation_id = "getPetTypeDetail",
    summary = "Get the details of a pet type",
    description = "Looks up the pet type by id and returns the details linked to it.",
    params(("id" = i32, Path, description = "Pet type ID (not the details ID)")),
    responses(
        (status = 200, description = "Linked details", body = PetTypeDetailResponse),
        (status = 404, description = "Pet type or details not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(pet_type_id))]
pub async fn get_pet_type_detail(
    State(state): State<AppState>,
    Path(pet_type_id): Path<i32>,
) -> Result<Json<PetTypeDetailResponse>, AppError> {
    let record = pet_type_detail_service(&state)
        .get_by_pet_type_id(pet_type_id)
        .await?;
    Ok(Json(record.into()))
}

#[utoipa::path(
    patch,
    path = "/pet-type-details/{id}",
    tag = "Pet Type Details",
    operation_id = "patchPetTypeDetail",
    summary = "Partially update pet type details",
    description = "Applies a map of field name to new value. Supported keys are `temperament`, `length`, `weight` and `petTypeId` (re-links the record). Numeric values may be given as numbers or numeric strings. Any other key rejects the whole request and nothing is saved. An empty map returns the record unchanged.",
    params(("id" = i32, Path, description = "Pet type detail ID")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Details updated", body = PetTypeDetailMessageResponse),
        (status = 400, description = "Unsupported field or invalid value (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Details or pet type not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id, fields = payload.len()))]
pub async fn patch_pet_type_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<Json<PetTypeDetailMessageResponse>, AppError> {
    let record = pet_type_detail_service(&state)
        .partial_update(id, &payload)
        .await?;

    Ok(Json(PetTypeDetailMessageResponse {
        message: "PetTypeDetail partially updated".into(),
        pet: record.into(),
    }))
}

#[utoipa::path(
    put,
    path = "/pet-type-details/{id}",
    tag = "Pet Type Details",
    operation_id = "replacePetTypeDetail",
    summary = "Replace pet type details",
    description = "Overwrites the pet type link, temperament, length and weight. Every field of the body is required.",
    params(("id" = i32, Path, description = "Pet type detail ID")),
    request_body = PetTypeDetailView,
    responses(
        (status = 200, description = "Details replaced", body = PetTypeDetailMessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Details or pet type not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id, pet_type_id = ?payload.pet_type_id))]
pub async fn replace_pet_type_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<PetTypeDetailView>,
) -> Result<Json<PetTypeDetailMessageResponse>, AppError> {
    validate_replace_detail(&payload)?;

    let record = pet_type_detail_service(&state).replace(id, &payload).await?;

    Ok(Json(PetTypeDetailMessageResponse {
        message: "PetTypeDetail updated".into(),
        pet: record.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/pet-type-details/{id}",
    tag = "Pet Type Details",
    operation_id = "deletePetTypeDetail",
    summary = "Delete pet type details",
    description = "Deletes the details record with this id.",
    params(("id" = i32, Path, description = "Pet type detail ID")),
    responses(
        (status = 200, description = "Details deleted", body = MessageResponse),
        (status = 404, description = "Details not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_pet_type_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    pet_type_detail_service(&state).delete_by_id(id).await?;
    Ok(Json(MessageResponse::new("Pet type deleted")))
}
