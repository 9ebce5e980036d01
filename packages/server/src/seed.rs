use sea_orm::*;
use tracing::info;

use crate::entity::pet_type;

/// Default pet types seeded on startup.
const DEFAULT_PET_TYPES: &[&str] = &["cat", "dog", "lizard", "snake", "bird", "hamster"];

/// Seed the `pet_type` table with defaults. Existing names are left untouched.
pub async fn seed_pet_types<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let mut inserted = 0u32;
    for &name in DEFAULT_PET_TYPES {
        let model = pet_type::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let result = pet_type::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(pet_type::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await;

        match result {
            Ok(0) | Err(DbErr::RecordNotInserted) => {}
            Ok(_) => inserted += 1,
            Err(e) => return Err(e),
        }
    }

    if inserted > 0 {
        info!("Seeded {} new pet types", inserted);
    }

    Ok(())
}
