use std::path::PathBuf;

/// Errors raised while reading or writing the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record store {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    #[error("No valid data in the record store")]
    EmptyDataset,

    #[error("Record store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record store format error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record store lock poisoned")]
    Poisoned,
}
