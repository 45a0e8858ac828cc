//! Integration tests for the MySQL repositories
//!
//! These tests require a provisioned database to execute.
//! Run with: cargo test -p gl_infra --test mysql_integration -- --ignored

use chrono::Utc;

use gl_core::domain::entities::token::{AccessTokenRecord, RefreshTokenRecord};
use gl_core::domain::entities::user::NewUser;
use gl_core::repositories::{TokenRepository, UserRepository};
use gl_infra::database::{DatabasePool, MySqlTokenRepository, MySqlUserRepository};
use gl_shared::config::DatabaseConfig;

async fn connect() -> DatabasePool {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    DatabasePool::new(&DatabaseConfig::from_env())
        .await
        .expect("Failed to connect to database")
}

fn unique_email(prefix: &str) -> String {
    format!("{}+{}@integration.test", prefix, Utc::now().timestamp_micros())
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_health_check() {
    let pool = connect().await;
    assert!(pool.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_create_and_find_user() {
    let pool = connect().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());

    let email = unique_email("create");
    let created = users
        .create(NewUser::new(email.clone(), "$2b$10$integrationhash"))
        .await
        .unwrap();

    assert!(created.id > 0);

    let by_email = users.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    assert_eq!(by_email.password_hash, "$2b$10$integrationhash");

    let by_id = users.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, email);
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_find_unknown_user_is_none() {
    let pool = connect().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());

    let missing = users.find_by_email(&unique_email("missing")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_rotation_keeps_single_row() {
    let pool = connect().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());
    let tokens = MySqlTokenRepository::new(pool.get_pool().clone());

    let user = users
        .create(NewUser::new(unique_email("rotate"), "$2b$10$integrationhash"))
        .await
        .unwrap();

    let first = tokens
        .rotate_refresh_token(user.id, RefreshTokenRecord::new(user.id))
        .await
        .unwrap();
    let second = tokens
        .rotate_refresh_token(user.id, RefreshTokenRecord::new(user.id))
        .await
        .unwrap();

    // The first id was rotated away, only the second survives
    assert!(tokens.find_refresh_token(&first.id).await.unwrap().is_none());
    let found = tokens.find_refresh_token(&second.id).await.unwrap().unwrap();
    assert_eq!(found.user_id, user.id);

    tokens.delete_refresh_token(&second.id).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_delete_refresh_token_is_idempotent() {
    let pool = connect().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());
    let tokens = MySqlTokenRepository::new(pool.get_pool().clone());

    let user = users
        .create(NewUser::new(unique_email("delete"), "$2b$10$integrationhash"))
        .await
        .unwrap();

    let record = tokens
        .rotate_refresh_token(user.id, RefreshTokenRecord::new(user.id))
        .await
        .unwrap();

    assert!(tokens.delete_refresh_token(&record.id).await.unwrap());
    assert!(!tokens.delete_refresh_token(&record.id).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires actual database
async fn test_record_access_token() {
    let pool = connect().await;
    let users = MySqlUserRepository::new(pool.get_pool().clone());
    let tokens = MySqlTokenRepository::new(pool.get_pool().clone());

    let user = users
        .create(NewUser::new(unique_email("audit"), "$2b$10$integrationhash"))
        .await
        .unwrap();

    let token_id = format!("integration.token.{}", Utc::now().timestamp_micros());
    tokens
        .record_access_token(AccessTokenRecord::new(token_id, 86400, user.id))
        .await
        .unwrap();
}
