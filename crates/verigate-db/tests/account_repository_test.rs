//! Integration tests for the Account repository using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use verigate_core::error::VerigateError;
use verigate_core::models::account::CreateAccount;
use verigate_core::repository::AccountRepository;
use verigate_db::repository::SurrealAccountRepository;

/// Helper: spin up an in-memory DB and run migrations.
async fn setup() -> SurrealAccountRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    verigate_db::run_migrations(&db).await.unwrap();
    SurrealAccountRepository::new(db)
}

fn alice() -> CreateAccount {
    CreateAccount {
        username: "alice".into(),
        email: "alice@example.com".into(),
        password_hash: "$argon2id$fake-digest".into(),
        verification_token: "tok-alice".into(),
    }
}

#[tokio::test]
async fn create_and_get_account() {
    let repo = setup().await;

    let account = repo.create(alice()).await.unwrap();

    assert_eq!(account.username, "alice");
    assert_eq!(account.email, "alice@example.com");
    assert!(!account.verified);
    assert_eq!(account.verification_token.as_deref(), Some("tok-alice"));

    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.username, "alice");
}

#[tokio::test]
async fn get_by_username_and_email() {
    let repo = setup().await;
    let account = repo.create(alice()).await.unwrap();

    let by_username = repo.get_by_username("alice").await.unwrap();
    assert_eq!(by_username.id, account.id);

    let by_email = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.id, account.id);
}

#[tokio::test]
async fn missing_account_is_not_found() {
    let repo = setup().await;

    let err = repo.get_by_email("nobody@example.com").await.unwrap_err();
    assert!(matches!(err, VerigateError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_username_rejected() {
    let repo = setup().await;
    repo.create(alice()).await.unwrap();

    let result = repo
        .create(CreateAccount {
            username: "alice".into(),
            email: "other@example.com".into(),
            password_hash: "$argon2id$fake-digest".into(),
            verification_token: "tok-other".into(),
        })
        .await;

    assert!(
        matches!(result, Err(VerigateError::AlreadyExists { .. })),
        "duplicate username should be rejected, got: {result:?}"
    );
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let repo = setup().await;
    repo.create(alice()).await.unwrap();

    let result = repo
        .create(CreateAccount {
            username: "alice2".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$fake-digest".into(),
            verification_token: "tok-other".into(),
        })
        .await;

    assert!(
        matches!(result, Err(VerigateError::AlreadyExists { .. })),
        "duplicate email should be rejected, got: {result:?}"
    );
}

#[tokio::test]
async fn concurrent_identical_registrations_race() {
    let repo = setup().await;

    // Two identical creates issued concurrently: the unique index must let
    // exactly one through.
    let (a, b) = tokio::join!(repo.create(alice()), repo.create(alice()));

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|&&ok| ok).count();
    assert_eq!(successes, 1, "exactly one concurrent create may succeed");
}

#[tokio::test]
async fn get_by_verification_token() {
    let repo = setup().await;
    let account = repo.create(alice()).await.unwrap();

    let fetched = repo.get_by_verification_token("tok-alice").await.unwrap();
    assert_eq!(fetched.id, account.id);

    let err = repo
        .get_by_verification_token("bogus-token")
        .await
        .unwrap_err();
    assert!(matches!(err, VerigateError::NotFound { .. }));
}

#[tokio::test]
async fn mark_verified_clears_token() {
    let repo = setup().await;
    let account = repo.create(alice()).await.unwrap();

    repo.mark_verified(account.id).await.unwrap();

    let fetched = repo.get_by_id(account.id).await.unwrap();
    assert!(fetched.verified);
    assert!(fetched.verification_token.is_none());

    // The consumed token no longer resolves.
    let err = repo
        .get_by_verification_token("tok-alice")
        .await
        .unwrap_err();
    assert!(matches!(err, VerigateError::NotFound { .. }));
}

#[tokio::test]
async fn mark_verified_unknown_id_is_not_found() {
    let repo = setup().await;

    let err = repo.mark_verified(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, VerigateError::NotFound { .. }));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    verigate_db::run_migrations(&db).await.unwrap();
    verigate_db::run_migrations(&db).await.unwrap();
}
