use thiserror::Error;

/// Convenient result alias for the heartjump library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the DynamoDB insert is rejected or cannot be sent.
    #[error("put_item against {table} failed: {message}")]
    StorePut { table: String, message: String },
}
