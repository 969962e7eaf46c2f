//! VERIGATE Database — SurrealDB connection management, schema
//! migrations, and the account repository implementation.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::run_migrations;
