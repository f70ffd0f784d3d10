use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaberError {
    #[error("unknown page: {0} (expected one of: dashboard, meusquizzes, turmas, relatorios, forum)")]
    UnknownPage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
