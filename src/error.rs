use thiserror::Error;

#[derive(Error, Debug)]
pub enum RideMatchError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("catalog parse error in {path}: {message}")]
    CatalogParse { path: String, message: String },

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("no item with id '{0}' in catalog")]
    UnknownItem(String),

    #[error("catalog is empty: {0}")]
    EmptyCatalog(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RideMatchError>;
