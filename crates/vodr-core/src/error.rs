use thiserror::Error;

#[derive(Debug, Error)]
pub enum VodrError {
    #[error("import parse failed: {0}")]
    ImportParse(String),

    #[error("page element not found: {0}")]
    ElementNotFound(String),

    #[error("field injection failed: {0}")]
    Injection(String),

    #[error("config error: {0}")]
    Config(String),
}
