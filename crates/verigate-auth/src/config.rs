//! Authentication configuration.

/// Configuration for the account service.
///
/// Constructed once at process start and passed by reference; nothing in
/// here mutates after startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// PEM-encoded Ed25519 private key for session-token signing.
    pub jwt_private_key_pem: String,
    /// PEM-encoded Ed25519 public key for session-token verification.
    pub jwt_public_key_pem: String,
    /// Session token lifetime in seconds (default: 3600 = 1 hour).
    pub session_token_lifetime_secs: u64,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
    /// Minimum password length for policy enforcement.
    pub min_password_length: usize,
    /// Externally visible base URL, used to build verification links.
    pub base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_private_key_pem: String::new(),
            jwt_public_key_pem: String::new(),
            session_token_lifetime_secs: 3600,
            jwt_issuer: "verigate".into(),
            pepper: None,
            min_password_length: 8,
            base_url: "http://localhost:5000".into(),
        }
    }
}
