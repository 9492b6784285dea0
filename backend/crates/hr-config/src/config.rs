use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, MailConfig, PaginationConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub mail: MailConfig,
    pub pagination: PaginationConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. HR_CONFIG_DIR env var, else ./.hr/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Read config.toml if it exists, else use defaults
    /// 4. Apply HR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: HR_CONFIG_DIR env var > ./.hr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate every section. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.logging.validate()?;
        self.mail.validate()?;
        self.pagination.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Absolute log file path, or None when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(file)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s, max {} concurrent requests)",
            self.server.host,
            self.server.port,
            self.server.request_timeout_secs,
            self.server.max_concurrent_requests
        );
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  mail: {} (from: {}, transport: {})",
            if self.mail.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.mail.from,
            self.mail.relay_url.as_deref().unwrap_or("log")
        );
        info!(
            "  pagination: default size {}, max size {}",
            self.pagination.default_page_size, self.pagination.max_page_size
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HR_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "HR_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );
        Self::apply_env_parse(
            "HR_SERVER_MAX_CONCURRENT_REQUESTS",
            &mut self.server.max_concurrent_requests,
        );

        // Database
        Self::apply_env_string("HR_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "HR_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "HR_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("HR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HR_LOG_FILE", &mut self.logging.file);

        // Mail
        Self::apply_env_bool("HR_MAIL_ENABLED", &mut self.mail.enabled);
        Self::apply_env_string("HR_MAIL_FROM", &mut self.mail.from);
        Self::apply_env_option_string("HR_MAIL_RELAY_URL", &mut self.mail.relay_url);
        Self::apply_env_parse("HR_MAIL_TIMEOUT_SECS", &mut self.mail.timeout_secs);

        // Pagination
        Self::apply_env_parse(
            "HR_PAGINATION_DEFAULT_PAGE_SIZE",
            &mut self.pagination.default_page_size,
        );
        Self::apply_env_parse(
            "HR_PAGINATION_MAX_PAGE_SIZE",
            &mut self.pagination.max_page_size,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val).filter(|v| !v.trim().is_empty());
        }
    }
}
