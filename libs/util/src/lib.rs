use std::{
    env,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing::warn;

pub const CONFIG_ENV: &str = "MEDAL_TALLY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./Config.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub paths: Paths,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub sqlx_logging: bool,
    /// Issue `CREATE TABLE IF NOT EXISTS events` at startup.
    pub create_schema: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "mysql://root@localhost:3306/tabulation_db".to_string(),
            max_connections: 5,
            min_connections: 0,
            acquire_timeout_secs: 5,
            sqlx_logging: true,
            create_schema: true,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Reads the file named by `MEDAL_TALLY_CONFIG` (or `./Config.toml`),
    /// then applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(CONFIG_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_from(Path::new(&path))?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without looking at the environment. A missing
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read {}", path.display())
            })?;
            toml::from_str::<Config>(&text).with_context(|| {
                format!("failed to parse {}", path.display())
            })?
        } else {
            warn!(path = %path.display(), "config not found, using defaults");
            Config::default()
        };

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| anyhow!("invalid server address: {e}"))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.socket_addr()?;
        if self.database.url.trim().is_empty() {
            return Err(anyhow!("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(anyhow!(
                "database.max_connections must be greater than 0"
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(anyhow!(
                "database.min_connections must not exceed max_connections"
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("DATABASE_URL") {
            self.database.url = url;
        }
        if let Ok(host) = env::var("MEDAL_TALLY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("MEDAL_TALLY_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(%port, "ignoring invalid MEDAL_TALLY_PORT"),
            }
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        self.paths.templates_dir = resolve_path(base, &self.paths.templates_dir);
        self.paths.static_dir = resolve_path(base, &self.paths.static_dir);
    }
}

fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_from_missing_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");

        // Act
        let config = Config::load_from(&path).unwrap();

        // Assert
        assert_eq!(config.server, Server::default());
        assert_eq!(config.database, Database::default());
        assert_eq!(config.paths.templates_dir, dir.path().join("templates"));
    }

    #[test]
    fn test_load_from_partial_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        fs::write(
            &path,
            r#"
            [server]
            port = 9000

            [database]
            url = "sqlite::memory:"
            max_connections = 1

            [paths]
            static_dir = "/srv/static"
            "#,
        )
        .unwrap();

        // Act
        let config = Config::load_from(&path).unwrap();

        // Assert
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert!(config.database.create_schema);
        assert_eq!(config.paths.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.paths.templates_dir, dir.path().join("templates"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_invalid_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Config.toml");
        fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

        // Act
        let config = Config::load_from(&path);

        // Assert
        assert!(config.is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        config.database.max_connections = 1;
        config.database.url = " ".to_string();
        assert!(config.validate().is_err());

        config.database.url = "sqlite::memory:".to_string();
        config.server.host = "not a host".to_string();
        assert!(config.validate().is_err());
    }
}
