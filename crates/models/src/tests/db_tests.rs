use crate::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

use super::setup_test_db;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let connection_time = start.elapsed();

    println!("Database connection established in {:?}", connection_time);

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    assert!(connection_time < Duration::from_secs(5),
           "Connection took too long: {:?}", connection_time);
    Ok(())
}

/// Pool settings from config are accepted by the driver
#[tokio::test]
async fn test_custom_config_connection() -> Result<()> {
    if setup_test_db().await?.is_none() {
        return Ok(());
    }

    let config = DatabaseConfig {
        url: std::env::var("DATABASE_URL")?,
        max_connections: 3,
        min_connections: 1,
        connect_timeout_secs: 10,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&config).await?;

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT current_database()".to_string());
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

/// Record tables exist after migrations
#[tokio::test]
async fn test_tables_exist() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    for table in ["profile", "customer"] {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT to_regclass('public.{table}')::text AS name"),
        );
        let row = db.query_one(stmt).await?.expect("one row");
        let name: Option<String> = row.try_get("", "name")?;
        assert_eq!(name.as_deref(), Some(table));
    }
    Ok(())
}
