mod query;
mod service;
mod update;

pub use query::{DetailListRequest, MAX_ROW_BOUND, SortDirection, SortField, SortSpec};
pub use service::{LIST_CACHE_NAMESPACE, PetTypeDetailService};
pub use update::DetailUpdate;

use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use crate::entity::{pet_type, pet_type_detail};
use crate::state::AppState;

/// A stored detail together with the pet type it is linked to, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PetTypeDetail {
    pub detail: pet_type_detail::Model,
    pub pet_type: Option<pet_type::Model>,
}

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Service bound to the shared connection pool and list cache.
pub fn pet_type_detail_service(state: &AppState) -> PetTypeDetailService<'_, DatabaseConnection> {
    PetTypeDetailService::new(&state.db, state.cache.as_ref())
}
