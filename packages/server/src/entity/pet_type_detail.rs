use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_type_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// NULL until the record is linked through a partial update or replace.
    #[sea_orm(unique)]
    pub pet_type_id: Option<i32>,
    #[sea_orm(belongs_to, from = "pet_type_id", to = "id")]
    pub pet_type: HasOne<super::pet_type::Entity>,

    pub temperament: String,
    pub length: f64,
    pub weight: f64,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
