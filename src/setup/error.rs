use thiserror::Error;

pub type SetupResult<T> = Result<T, SetupError>;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Log system initialization failed: {0}")]
    Logging(String),
    #[error("App paths initialization failed: {0:#}")]
    Paths(anyhow::Error),
    #[error("Config loading failed: {0:#}")]
    Config(anyhow::Error),
}
