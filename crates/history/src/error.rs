use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to write history listing: {0}")]
    Io(#[from] std::io::Error),
}
