use crate::{customer, profile};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter};
use anyhow::Result;
use serde_json::json;
use uuid::Uuid;

use super::setup_test_db;

fn profile_payload(email: &str) -> serde_json::Value {
    json!({
        "name": "Crud Tester",
        "email": email,
        "phone": "555-0101",
        "skills": ["sea-orm", "postgres"],
        "experience": "3 years",
        "education": "MSc",
        "jobPreferences": {"location": "Lisbon", "jobType": "Contract", "industry": "Retail"},
        "profileImage": "/img/crud.png"
    })
}

/// Insert a profile row and read it back as a record
#[tokio::test]
async fn test_profile_insert_and_read() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let email = format!("crud_{}@example.com", Uuid::new_v4());
    let record = profile::NewProfile::validate(&profile_payload(&email))?
        .into_record(Uuid::new_v4(), Utc::now());
    let inserted = profile::ActiveModel::from(&record).insert(&db).await?;
    assert_eq!(inserted.email, email);

    let found = profile::Entity::find()
        .filter(profile::Column::Email.eq(email.clone()))
        .one(&db)
        .await?
        .expect("profile row");
    let back = profile::Profile::try_from(found)?;
    assert_eq!(back.skills, record.skills);
    assert_eq!(back.job_preferences, record.job_preferences);

    profile::Entity::delete_by_id(record.id).exec(&db).await?;
    Ok(())
}

/// The unique index rejects a second customer with the same email
#[tokio::test]
async fn test_customer_email_unique() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let email = format!("dup_{}@example.com", Uuid::new_v4());
    let first = customer::NewCustomer {
        name: "First".into(),
        email: email.clone(),
        phone: "1".into(),
        address: "A".into(),
    }
    .into_record(Uuid::new_v4(), Utc::now());
    customer::ActiveModel::from(&first).insert(&db).await?;

    let second = customer::Customer { id: Uuid::new_v4(), name: "Second".into(), ..first.clone() };
    let err = customer::ActiveModel::from(&second).insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))), "{err}");

    customer::Entity::delete_by_id(first.id).exec(&db).await?;
    Ok(())
}

/// Email has no length cap in the table; long addresses store like any other
#[tokio::test]
async fn test_long_email_is_stored() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let email = format!("{}_{}@example.com", "x".repeat(400), Uuid::new_v4());
    let record = customer::NewCustomer {
        name: "Long".into(),
        email: email.clone(),
        phone: "1".into(),
        address: "A".into(),
    }
    .into_record(Uuid::new_v4(), Utc::now());
    let inserted = customer::ActiveModel::from(&record).insert(&db).await?;
    assert_eq!(inserted.email, email);

    let back = profile::NewProfile::validate(&profile_payload(&email))?.into_record(Uuid::new_v4(), Utc::now());
    profile::ActiveModel::from(&back).insert(&db).await?;

    customer::Entity::delete_by_id(record.id).exec(&db).await?;
    profile::Entity::delete_by_id(back.id).exec(&db).await?;
    Ok(())
}
