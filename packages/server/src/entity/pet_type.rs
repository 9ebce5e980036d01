use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pet kind classifier ("cat", "dog", ...). Owned by the wider clinic
/// application; this service only reads it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    #[sea_orm(has_one)]
    pub detail: HasOne<super::pet_type_detail::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
