use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to serialize collection: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to write storage slot: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to write export file: {0}")]
    ExportWrite(std::io::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
