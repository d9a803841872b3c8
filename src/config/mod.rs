use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved from the environment at startup.
///
/// Pointing `DATA_DIR` and `CREDENTIALS_PATH` at scratch locations is how a
/// test or staging deployment gets its own document directory and user file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub credentials_path: PathBuf,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::resolve(
            env::var("DATA_DIR").ok(),
            env::var("CREDENTIALS_PATH").ok(),
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok().and_then(|s| s.parse().ok()),
        )
    }

    fn resolve(
        data_dir: Option<String>,
        credentials_path: Option<String>,
        host: Option<String>,
        port: Option<u16>,
    ) -> Self {
        Self {
            data_dir: PathBuf::from(data_dir.unwrap_or_else(|| "data".to_string())),
            credentials_path: PathBuf::from(
                credentials_path.unwrap_or_else(|| ".users.yml".to_string()),
            ),
            host: host.unwrap_or_else(|| "0.0.0.0".to_string()),
            port: port.unwrap_or(8080),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(None, None, None, None);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.credentials_path, PathBuf::from(".users.yml"));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_resolve_overrides() {
        let config = AppConfig::resolve(
            Some("test/data".to_string()),
            Some("test/.users.yml".to_string()),
            Some("127.0.0.1".to_string()),
            Some(9000),
        );
        assert_eq!(config.data_dir, PathBuf::from("test/data"));
        assert_eq!(config.credentials_path, PathBuf::from("test/.users.yml"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }
}
