use thiserror::Error;

/// A convenience type alias for results which fail with `RevealError`
pub type Result<T> = core::result::Result<T, RevealError>;

/// Everything that can stop a reveal part way through
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevealError {
    #[error("required element not found: {0}")]
    ElementNotFound(#[from] MissingElement),
    #[error("document rejected mutation: {0}")]
    Dom(#[from] DomError),
    #[error("invalid reveal configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Which of the two required elements was absent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissingElement {
    #[error("no element with id {id:?}")]
    Table { id: String },
    #[error("element {table_id:?} has no <{tag}> descendant")]
    Body { table_id: String, tag: String },
}

/// An exception raised by the host DOM, shaped like a `DOMException`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: {message}")]
pub struct DomError {
    pub name: String,
    pub message: String,
}

impl DomError {
    pub fn new<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("marker class {0:?} must be a single non-empty token")]
    InvalidClass(String),
}
