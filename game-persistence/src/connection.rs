use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    if database_url == MEMORY_DATABASE_URL {
        return connect_to_memory_database().await;
    }

    Database::connect(database_url).await
}

pub async fn connect_to_memory_database() -> Result<DatabaseConnection, DbErr> {
    // Every pooled connection would get its own empty in-memory database
    let mut options = ConnectOptions::new(MEMORY_DATABASE_URL);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}

pub async fn connect_and_migrate(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = connect_to_database(database_url).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}
