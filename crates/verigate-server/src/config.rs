//! Process configuration, loaded once at startup from the environment.

use thiserror::Error;
use verigate_auth::AuthConfig;
use verigate_db::DbConfig;
use verigate_mail::MailConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    Missing { name: &'static str },

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
    pub db: DbConfig,
    pub mail: MailConfig,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary lookup function. Split out
    /// from [`ServerConfig::load`] so tests never touch process-global
    /// environment state.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing { name });
        let or_default = |name: &str, default: &str| get(name).unwrap_or_else(|| default.into());

        let lifetime_secs = match get("VERIGATE_TOKEN_LIFETIME_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                name: "VERIGATE_TOKEN_LIFETIME_SECS",
                reason: e.to_string(),
            })?,
            None => 3600,
        };

        let min_password_length = match get("VERIGATE_MIN_PASSWORD_LENGTH") {
            Some(raw) => raw.parse::<usize>().map_err(|e| ConfigError::Invalid {
                name: "VERIGATE_MIN_PASSWORD_LENGTH",
                reason: e.to_string(),
            })?,
            None => 8,
        };

        let smtp_port = match get("VERIGATE_SMTP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "VERIGATE_SMTP_PORT",
                reason: e.to_string(),
            })?,
            None => 587,
        };

        let mail_defaults = MailConfig::default();

        Ok(Self {
            bind_addr: or_default("VERIGATE_BIND_ADDR", "0.0.0.0:5000"),
            db: DbConfig {
                url: or_default("VERIGATE_DB_URL", "127.0.0.1:8000"),
                namespace: or_default("VERIGATE_DB_NAMESPACE", "verigate"),
                database: or_default("VERIGATE_DB_DATABASE", "main"),
                username: or_default("VERIGATE_DB_USER", "root"),
                password: or_default("VERIGATE_DB_PASS", "root"),
            },
            mail: MailConfig {
                smtp_host: or_default("VERIGATE_SMTP_HOST", &mail_defaults.smtp_host),
                smtp_port,
                smtp_username: required("VERIGATE_SMTP_USER")?,
                smtp_password: required("VERIGATE_SMTP_PASS")?,
                from_address: or_default("VERIGATE_MAIL_FROM", &mail_defaults.from_address),
                timeout_secs: mail_defaults.timeout_secs,
            },
            auth: AuthConfig {
                jwt_private_key_pem: required("VERIGATE_JWT_PRIVATE_KEY")?,
                jwt_public_key_pem: required("VERIGATE_JWT_PUBLIC_KEY")?,
                session_token_lifetime_secs: lifetime_secs,
                jwt_issuer: or_default("VERIGATE_JWT_ISSUER", "verigate"),
                pepper: get("VERIGATE_PEPPER"),
                min_password_length,
                base_url: or_default("VERIGATE_BASE_URL", "http://localhost:5000"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn minimal_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("VERIGATE_SMTP_USER", "mailer@example.com"),
            ("VERIGATE_SMTP_PASS", "app-password"),
            ("VERIGATE_JWT_PRIVATE_KEY", "fake-private-pem"),
            ("VERIGATE_JWT_PUBLIC_KEY", "fake-public-pem"),
        ])
    }

    fn lookup<'a>(env: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| env.get(name).map(|v| v.to_string())
    }

    #[test]
    fn minimal_env_uses_defaults() {
        let env = minimal_env();
        let config = ServerConfig::from_lookup(lookup(&env)).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:5000");
        assert_eq!(config.db.namespace, "verigate");
        assert_eq!(config.auth.session_token_lifetime_secs, 3600);
        assert_eq!(config.auth.min_password_length, 8);
        assert!(config.auth.pepper.is_none());
        assert_eq!(config.mail.smtp_port, 587);
    }

    #[test]
    fn missing_required_var_fails() {
        let mut env = minimal_env();
        env.remove("VERIGATE_SMTP_PASS");

        let err = ServerConfig::from_lookup(lookup(&env)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Missing {
                name: "VERIGATE_SMTP_PASS"
            }
        ));
    }

    #[test]
    fn overrides_are_applied() {
        let mut env = minimal_env();
        env.insert("VERIGATE_TOKEN_LIFETIME_SECS", "900");
        env.insert("VERIGATE_BASE_URL", "https://accounts.example.com");
        env.insert("VERIGATE_PEPPER", "secret-pepper");

        let config = ServerConfig::from_lookup(lookup(&env)).unwrap();
        assert_eq!(config.auth.session_token_lifetime_secs, 900);
        assert_eq!(config.auth.base_url, "https://accounts.example.com");
        assert_eq!(config.auth.pepper.as_deref(), Some("secret-pepper"));
    }

    #[test]
    fn malformed_number_is_rejected() {
        let mut env = minimal_env();
        env.insert("VERIGATE_TOKEN_LIFETIME_SECS", "not-a-number");

        let err = ServerConfig::from_lookup(lookup(&env)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
