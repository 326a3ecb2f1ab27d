use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid data shape: {0}")]
    InvalidDataShape(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type TableResult<T> = Result<T, TableError>;

impl TableError {
    /// Whether the caller handed in data the renderer cannot turn into rows.
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            TableError::InvalidDataShape(_) | TableError::Serialization(_)
        )
    }
}
