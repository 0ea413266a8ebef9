use serde::Deserialize;

/// Configuration for the API server
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// PostgreSQL database URL
    pub database_url: String,
    /// Redis URL
    pub redis_url: String,
    /// Secret expected in the Authorization header of the lead listing routes
    pub auth_secret: String,
    /// Port to run the server on
    pub port: u16,
    /// Recipient that new leads are reported to
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Comma separated list of allowed origins, `*` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
    /// How long catalog reads stay in Redis
    #[serde(default = "default_catalog_cache_ttl_seconds")]
    pub catalog_cache_ttl_seconds: u64,
    /// Directory for the rolling request log
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_admin_email() -> String {
    "hello@gadgethavenabuja.com".to_string()
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_catalog_cache_ttl_seconds() -> u64 {
    60
}

fn default_log_dir() -> String {
    "logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let vars = vec![
            ("DATABASE_URL".to_string(), "postgres://localhost/gadget_haven".to_string()),
            ("REDIS_URL".to_string(), "redis://localhost".to_string()),
            ("AUTH_SECRET".to_string(), "secret".to_string()),
            ("PORT".to_string(), "3001".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.admin_email, "hello@gadgethavenabuja.com");
        assert_eq!(config.cors_origins, "*");
        assert_eq!(config.catalog_cache_ttl_seconds, 60);
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_config_missing_database_url() {
        let vars = vec![
            ("REDIS_URL".to_string(), "redis://localhost".to_string()),
            ("AUTH_SECRET".to_string(), "secret".to_string()),
            ("PORT".to_string(), "3001".to_string()),
        ];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
