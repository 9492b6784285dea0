mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod pagination_config;
mod server_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::MailConfig;
pub use pagination_config::PaginationConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "HR_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".hr";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 512;
const MIN_MAX_CONCURRENT_REQUESTS: usize = 1;
const MAX_MAX_CONCURRENT_REQUESTS: usize = 65_536;

const DEFAULT_DATABASE_FILENAME: &str = "directory.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
const MAX_BUSY_TIMEOUT_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MAIL_FROM: &str = "directory@example.com";
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;
const MAX_MAIL_TIMEOUT_SECS: u64 = 120;

const DEFAULT_PAGE_SIZE: i64 = 10;
const DEFAULT_MAX_PAGE_SIZE: i64 = 100;
const MAX_MAX_PAGE_SIZE: i64 = 10_000;
