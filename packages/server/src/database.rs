use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::config::DatabaseConfig;
use crate::entity::{pet_type, pet_type_detail};

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("petclinic_server::entity::*")
        .sync(&db)
        .await?;

    Ok(db)
}

/// Create both tables directly from the entities, without the registry sync.
/// Used to set up throwaway databases in tests.
#[doc(hidden)]
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute_raw(backend.build(&schema.create_table_from_entity(pet_type::Entity)))
        .await?;
    db.execute_raw(backend.build(&schema.create_table_from_entity(pet_type_detail::Entity)))
        .await?;
    Ok(())
}
