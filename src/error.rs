use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiretrackError {
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),

    #[error("unknown facet '{0}' for entity '{1}'")]
    UnknownFacet(String, String),

    #[error("invalid filter expression '{0}': {1}")]
    InvalidFilter(String, String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Backend errors
    #[error("configuration error: {0}")]
    Config(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("backend error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL '{0}': {1}")]
    InvalidUrl(String, String),

    // Session persistence errors
    #[error("session store error: {0}")]
    Session(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HiretrackError>;
