use mongodb::error::ErrorKind;
use thiserror::Error;

/// Failure reported by a trainer collection backend.
///
/// Display is the bare underlying message; the HTTP layer writes it
/// verbatim into error response bodies.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport or driver failure.
    #[error("{0}")]
    Store(eyre::Error),
    /// A stored document did not decode into a trainer.
    #[error("{0}")]
    Decode(eyre::Error),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        if matches!(*err.kind, ErrorKind::BsonDeserialization(_)) {
            StoreError::Decode(err.into())
        } else {
            StoreError::Store(err.into())
        }
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Store(err.into())
    }
}
