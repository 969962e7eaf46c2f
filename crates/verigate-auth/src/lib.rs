//! VERIGATE Auth — password hashing, session-token issuance/validation,
//! verification-token generation, and the account lifecycle state machine.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod verification;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AccountService, LoginInput, LoginOutput, RegisterInput, RegisterOutput};
pub use token::SessionTokenClaims;
