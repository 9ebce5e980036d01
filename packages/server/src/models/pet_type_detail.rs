use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::entity::{pet_type, pet_type_detail};
use crate::error::AppError;
use crate::pet_type_detail::PetTypeDetail;

pub use super::shared::{MessageResponse, Page};

/// Wire projection of a pet type detail, used both as the create/replace
/// payload and as the list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetTypeDetailView {
    #[schema(example = 2)]
    pub pet_type_id: Option<i32>,
    #[schema(example = "dog")]
    pub pet_type_name: Option<String>,
    #[schema(example = "Friendly")]
    pub temperament: String,
    #[schema(example = 10.0)]
    pub length: f64,
    #[schema(example = 20.0)]
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct PetTypeResponse {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "dog")]
    pub name: String,
}

/// Stored record as returned by get, patch and put.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetTypeDetailResponse {
    #[schema(example = 1)]
    pub id: i32,
    /// Linked pet type, null until the record is linked.
    pub pet_type: Option<PetTypeResponse>,
    #[schema(example = "Friendly")]
    pub temperament: String,
    #[schema(example = 10.0)]
    pub length: f64,
    #[schema(example = 20.0)]
    pub weight: f64,
    #[schema(example = "2025-09-01T08:00:00Z")]
    pub created_at: DateTime<Utc>,
}

/// `{ "message": ..., "pet": ... }` body returned by patch and put.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct PetTypeDetailMessageResponse {
    #[schema(example = "PetTypeDetail updated")]
    pub message: String,
    pub pet: PetTypeDetailResponse,
}

/// Query parameters for listing pet type details.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PetTypeDetailListQuery {
    /// Case-insensitive substring matched against the pet type name.
    #[param(example = "dog")]
    pub name: Option<String>,
    /// Page number (0-based, default 0).
    #[param(example = 0)]
    pub page: Option<u64>,
    /// Items per page (default 10).
    #[param(example = 10)]
    pub size: Option<u64>,
    /// `field[,direction]`, default `id,asc`.
    #[param(example = "weight,desc")]
    pub sort: Option<String>,
}

impl From<pet_type::Model> for PetTypeResponse {
    fn from(m: pet_type::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

impl From<PetTypeDetail> for PetTypeDetailResponse {
    fn from(record: PetTypeDetail) -> Self {
        let PetTypeDetail { detail, pet_type } = record;
        Self {
            id: detail.id,
            pet_type: pet_type.map(Into::into),
            temperament: detail.temperament,
            length: detail.length,
            weight: detail.weight,
            created_at: detail.created_at,
        }
    }
}

/// Maps a view onto a new, unsaved record. Only temperament, length and
/// weight are copied: the pet type link is left empty.
pub fn new_detail_model(view: &PetTypeDetailView) -> pet_type_detail::ActiveModel {
    pet_type_detail::ActiveModel {
        pet_type_id: Set(None),
        temperament: Set(view.temperament.clone()),
        length: Set(view.length),
        weight: Set(view.weight),
        ..Default::default()
    }
}

/// Maps a stored record and its linked pet type (if any) onto the view.
pub fn detail_view(
    detail: &pet_type_detail::Model,
    pet_type: Option<&pet_type::Model>,
) -> PetTypeDetailView {
    PetTypeDetailView {
        pet_type_id: pet_type.map(|t| t.id),
        pet_type_name: pet_type.map(|t| t.name.clone()),
        temperament: detail.temperament.clone(),
        length: detail.length,
        weight: detail.weight,
    }
}

fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

fn validate_measurements(view: &PetTypeDetailView) -> Result<(), AppError> {
    if view.temperament.trim().is_empty() {
        return Err(AppError::Validation("Temperament is required".into()));
    }
    if !is_positive(view.length) {
        return Err(AppError::Validation("Length must be positive".into()));
    }
    if !is_positive(view.weight) {
        return Err(AppError::Validation("Weight must be positive".into()));
    }
    Ok(())
}

/// Create accepts a view without pet type id or name.
pub fn validate_create_detail(view: &PetTypeDetailView) -> Result<(), AppError> {
    validate_measurements(view)
}

/// Replace needs every field of the view.
pub fn validate_replace_detail(view: &PetTypeDetailView) -> Result<(), AppError> {
    if view.pet_type_id.is_none() {
        return Err(AppError::Validation("Pet type id is required".into()));
    }
    if view
        .pet_type_name
        .as_deref()
        .is_none_or(|name| name.trim().is_empty())
    {
        return Err(AppError::Validation("Pet type name is required".into()));
    }
    validate_measurements(view)
}
