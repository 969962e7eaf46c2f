//! SurrealDB implementation of [`AccountRepository`].
//!
//! Uniqueness of `username` and `email` is enforced by the UNIQUE indexes
//! defined in the schema; a violated index surfaces here as
//! [`DbError::Duplicate`], so there is no check-then-insert window.

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;
use verigate_core::error::VerigateResult;
use verigate_core::models::account::{Account, CreateAccount};
use verigate_core::repository::AccountRepository;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AccountRow {
    username: String,
    email: String,
    password_hash: String,
    verified: bool,
    verification_token: Option<String>,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AccountRowWithId {
    record_id: String,
    username: String,
    email: String,
    password_hash: String,
    verified: bool,
    verification_token: Option<String>,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self, id: Uuid) -> Account {
        Account {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            verified: self.verified,
            verification_token: self.verification_token,
            created_at: self.created_at,
        }
    }
}

impl AccountRowWithId {
    fn try_into_account(self) -> Result<Account, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Schema(format!("invalid UUID: {e}")))?;
        Ok(Account {
            id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            verified: self.verified,
            verification_token: self.verification_token,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB reports a UNIQUE index violation as a plain query error; this
/// is the stable fragment of its message.
fn is_unique_index_violation(msg: &str) -> bool {
    msg.contains("already contains")
}

/// SurrealDB implementation of the Account repository.
#[derive(Clone)]
pub struct SurrealAccountRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn get_by_field(&self, field: &'static str, value: &str) -> VerigateResult<Account> {
        let mut result = self
            .db
            .query(format!(
                "SELECT meta::id(id) AS record_id, * FROM account \
                 WHERE {field} = $value"
            ))
            .bind(("value", value.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: format!("{field}={value}"),
        })?;

        Ok(row.try_into_account()?)
    }
}

impl<C: Connection> AccountRepository for SurrealAccountRepository<C> {
    async fn create(&self, input: CreateAccount) -> VerigateResult<Account> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('account', $id) SET \
                 username = $username, email = $email, \
                 password_hash = $password_hash, \
                 verified = false, \
                 verification_token = $verification_token",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("email", input.email))
            .bind(("password_hash", input.password_hash))
            .bind(("verification_token", input.verification_token))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| {
            let msg = e.to_string();
            if is_unique_index_violation(&msg) {
                DbError::Duplicate {
                    entity: "account".into(),
                }
            } else {
                DbError::Schema(msg)
            }
        })?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(row.into_account(id))
    }

    async fn get_by_id(&self, id: Uuid) -> VerigateResult<Account> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('account', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(row.into_account(id))
    }

    async fn get_by_username(&self, username: &str) -> VerigateResult<Account> {
        self.get_by_field("username", username).await
    }

    async fn get_by_email(&self, email: &str) -> VerigateResult<Account> {
        self.get_by_field("email", email).await
    }

    async fn get_by_verification_token(&self, token: &str) -> VerigateResult<Account> {
        self.get_by_field("verification_token", token).await
    }

    async fn mark_verified(&self, id: Uuid) -> VerigateResult<()> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('account', $id) SET \
                 verified = true, verification_token = NONE",
            )
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Schema(e.to_string()))?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "account".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }
}
