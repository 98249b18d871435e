use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SiteError {
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("invalid site configuration: {0}")]
    InvalidConfig(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::InvalidConfig(err.to_string())
    }
}
