use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeshboxError {
    #[error("Empty point set: {0}")]
    EmptyPointSet(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, MeshboxError>;
