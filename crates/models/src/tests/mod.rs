/// Database connection tests
pub mod db_tests;

/// Entity insert/read tests for both record tables
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Connect and migrate, or `None` when no database is configured for tests.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    use migration::MigratorTrait;

    let url = match std::env::var("DATABASE_URL") {
        Ok(url) if std::env::var("SKIP_DB_TESTS").is_err() => url,
        _ => {
            println!("Skipping database tests (SKIP_DB_TESTS set or DATABASE_URL missing)");
            return Ok(None);
        }
    };
    let cfg = configs::DatabaseConfig { url, ..configs::DatabaseConfig::default() };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}
