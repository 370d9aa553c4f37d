use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub admin_secret: Option<SecretString>,
}

impl Config {
    /// Loads configuration from the environment. A missing `MONGODB_URI` or
    /// `JWT_SECRET` is a startup error; everything else has a sensible default.
    /// `ADMIN_SECRET` is optional; without it the admin-creation endpoint
    /// always refuses.
    pub fn from_env() -> AppResult<Self> {
        let mongo_conn_string = env::var("MONGODB_URI").map_err(|_| {
            AppError::InternalError("MONGODB_URI environment variable is not set".to_string())
        })?;

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| {
            AppError::InternalError("JWT_SECRET environment variable is not set".to_string())
        })?;

        Ok(Self {
            mongo_conn_string,
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "admission_portal".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: SecretString::from(jwt_secret),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            admin_secret: env::var("ADMIN_SECRET").ok().map(SecretString::from),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "admission_portal_test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            admin_secret: Some(SecretString::from("test_admin_secret".to_string())),
        }
    }
}
