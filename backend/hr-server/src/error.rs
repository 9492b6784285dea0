use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] hr_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] hr_db::DbError),

    #[error("Directory error: {0}")]
    Directory(#[from] hr_directory::DirectoryError),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
