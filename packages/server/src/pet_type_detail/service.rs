use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, SqlErr,
};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::{DetailError, DetailListRequest, DetailUpdate, PetTypeDetail};
use crate::cache::ResponseCache;
use crate::entity::{pet_type, pet_type_detail};
use crate::models::pet_type_detail::{Page, PetTypeDetailView, detail_view, new_detail_model};

/// Cache namespace holding list pages. Every mutation clears it.
pub const LIST_CACHE_NAMESPACE: &str = "pet_type_details";

pub struct PetTypeDetailService<'a, C: ConnectionTrait> {
    conn: &'a C,
    cache: &'a dyn ResponseCache,
}

impl<'a, C: ConnectionTrait> PetTypeDetailService<'a, C> {
    pub fn new(conn: &'a C, cache: &'a dyn ResponseCache) -> Self {
        Self { conn, cache }
    }

    /// Persist a new detail from `view`. The record is stored without a pet
    /// type link even when the view names one; link it with a partial update
    /// or replace.
    pub async fn create(&self, view: &PetTypeDetailView) -> Result<PetTypeDetail, DetailError> {
        let mut model = new_detail_model(view);
        model.created_at = Set(Utc::now());

        let detail = model.insert(self.conn).await.map_err(write_error)?;
        self.evict_list_cache();

        info!(id = detail.id, "Created pet type detail");
        Ok(PetTypeDetail {
            detail,
            pet_type: None,
        })
    }

    /// Fetch the detail linked to the pet type `pet_type_id`.
    pub async fn get_by_pet_type_id(&self, pet_type_id: i32) -> Result<PetTypeDetail, DetailError> {
        let pet_type = self
            .find_pet_type(pet_type_id)
            .await?
            .ok_or_else(|| DetailError::NotFound("PetType not found".into()))?;

        let detail = pet_type_detail::Entity::find()
            .filter(pet_type_detail::Column::PetTypeId.eq(pet_type.id))
            .one(self.conn)
            .await?
            .ok_or_else(|| DetailError::NotFound("Details not found".into()))?;

        Ok(PetTypeDetail {
            detail,
            pet_type: Some(pet_type),
        })
    }

    /// Delete the detail whose own primary key is `id` and return it as it
    /// was before deletion.
    pub async fn delete_by_id(&self, id: i32) -> Result<PetTypeDetail, DetailError> {
        let existing = self
            .find_with_pet_type(id)
            .await?
            .ok_or_else(|| DetailError::NotFound(format!("PetType ID {id} not found")))?;

        pet_type_detail::Entity::delete_by_id(id)
            .exec(self.conn)
            .await?;
        self.evict_list_cache();

        info!(id, "Deleted pet type detail");
        Ok(existing)
    }

    /// One page of details as views.
    ///
    /// The name filter is applied to the fetched page only, and the page's
    /// total reflects what survived the filter. Results are served from the
    /// list cache when the same request was answered since the last mutation.
    pub async fn list(
        &self,
        request: &DetailListRequest,
    ) -> Result<Page<PetTypeDetailView>, DetailError> {
        let cache_key = request.cache_key();
        if let Some(cached) = self.cache.get(LIST_CACHE_NAMESPACE, &cache_key) {
            match serde_json::from_value(cached) {
                Ok(page) => {
                    debug!(key = %cache_key, "List cache hit");
                    return Ok(page);
                }
                Err(e) => warn!(key = %cache_key, "Discarding unreadable cache entry: {}", e),
            }
        }

        let rows = pet_type_detail::Entity::find()
            .find_also_related(pet_type::Entity)
            .order_by(request.sort.field.column(), request.sort.direction.into())
            .offset(request.offset())
            .limit(request.size)
            .all(self.conn)
            .await?;

        let name_filter = request.name_filter();
        let content: Vec<PetTypeDetailView> = rows
            .iter()
            .filter(|(_, pet_type)| match (&name_filter, pet_type) {
                (None, _) => true,
                (Some(filter), Some(pet_type)) => pet_type.name.to_lowercase().contains(filter),
                (Some(_), None) => false,
            })
            .map(|(detail, pet_type)| detail_view(detail, pet_type.as_ref()))
            .collect();

        let page = Page::from_filtered(content, request.page, request.size);
        match serde_json::to_value(&page) {
            Ok(value) => self.cache.put(LIST_CACHE_NAMESPACE, cache_key, value),
            Err(e) => warn!("Failed to cache list page: {}", e),
        }

        Ok(page)
    }

    /// Apply `updates` in order and save once at the end.
    ///
    /// Any unsupported key or bad value aborts the whole call before anything
    /// is written. An empty map returns the record unchanged but still counts
    /// as a mutation for the list cache.
    pub async fn partial_update(
        &self,
        id: i32,
        updates: &Map<String, Value>,
    ) -> Result<PetTypeDetail, DetailError> {
        let PetTypeDetail {
            detail: existing,
            mut pet_type,
        } = self
            .find_with_pet_type(id)
            .await?
            .ok_or_else(|| DetailError::NotFound(format!("PetTypeDetail not found with id: {id}")))?;

        if updates.is_empty() {
            self.evict_list_cache();
            return Ok(PetTypeDetail {
                detail: existing,
                pet_type,
            });
        }

        let mut active: pet_type_detail::ActiveModel = existing.into();
        for (field, value) in updates {
            match DetailUpdate::parse(field, value)? {
                DetailUpdate::Temperament(temperament) => active.temperament = Set(temperament),
                DetailUpdate::Length(length) => active.length = Set(length),
                DetailUpdate::Weight(weight) => active.weight = Set(weight),
                DetailUpdate::PetType(pet_type_id) => {
                    let linked = self
                        .find_pet_type(pet_type_id)
                        .await?
                        .ok_or_else(|| DetailError::NotFound("PetType not found".into()))?;
                    active.pet_type_id = Set(Some(linked.id));
                    pet_type = Some(linked);
                }
            }
        }

        let detail = active.update(self.conn).await.map_err(write_error)?;
        self.evict_list_cache();

        debug!(id, fields = updates.len(), "Partially updated pet type detail");
        Ok(PetTypeDetail { detail, pet_type })
    }

    /// Overwrite the link and all measurements of detail `id` from `view`.
    pub async fn replace(
        &self,
        id: i32,
        view: &PetTypeDetailView,
    ) -> Result<PetTypeDetail, DetailError> {
        let existing = pet_type_detail::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| DetailError::NotFound(format!("PetTypeDetail not found with id: {id}")))?;

        let pet_type_id = view
            .pet_type_id
            .ok_or_else(|| DetailError::InvalidArgument("Pet type id is required".into()))?;
        let pet_type = self.find_pet_type(pet_type_id).await?.ok_or_else(|| {
            DetailError::NotFound(format!("PetType not found with id: {pet_type_id}"))
        })?;

        let mut active: pet_type_detail::ActiveModel = existing.into();
        active.pet_type_id = Set(Some(pet_type.id));
        active.temperament = Set(view.temperament.clone());
        active.length = Set(view.length);
        active.weight = Set(view.weight);

        let detail = active.update(self.conn).await.map_err(write_error)?;
        self.evict_list_cache();

        debug!(id, pet_type_id, "Replaced pet type detail");
        Ok(PetTypeDetail {
            detail,
            pet_type: Some(pet_type),
        })
    }

    async fn find_pet_type(&self, id: i32) -> Result<Option<pet_type::Model>, DbErr> {
        pet_type::Entity::find_by_id(id).one(self.conn).await
    }

    async fn find_with_pet_type(&self, id: i32) -> Result<Option<PetTypeDetail>, DbErr> {
        let row = pet_type_detail::Entity::find_by_id(id)
            .find_also_related(pet_type::Entity)
            .one(self.conn)
            .await?;
        Ok(row.map(|(detail, pet_type)| PetTypeDetail { detail, pet_type }))
    }

    fn evict_list_cache(&self) {
        self.cache.evict_all(LIST_CACHE_NAMESPACE);
        debug!(namespace = LIST_CACHE_NAMESPACE, "Evicted list cache");
    }
}

/// A second detail for the same pet type trips the unique constraint on
/// `pet_type_id`; report that as a bad request instead of a storage fault.
fn write_error(err: DbErr) -> DetailError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        DetailError::InvalidArgument("Pet type already has details".into())
    } else {
        DetailError::Database(err)
    }
}
