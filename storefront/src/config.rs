use serde::Deserialize;

/// Configuration for the storefront server
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Base URL of the Gadget Haven API, without the `/api` suffix
    pub backend_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// International number used for wa.me deep links
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_port() -> u16 {
    3000
}

fn default_whatsapp_number() -> String {
    "2349076087744".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_only_backend_is_set() {
        let config: Config = envy::from_iter(vec![(
            "BACKEND_URL".to_string(),
            "http://localhost:8000".to_string(),
        )])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.whatsapp_number, "2349076087744");
        assert_eq!(config.log_dir, "logs");
    }

    #[test]
    fn test_missing_backend_url_fails() {
        let result = envy::from_iter::<_, Config>(vec![("PORT".to_string(), "8080".to_string())]);
        assert!(result.is_err());
    }
}
