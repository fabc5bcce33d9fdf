use async_trait::async_trait;
use futures_util::stream::BoxStream;
use futures_util::{StreamExt as _, TryStreamExt as _};
use model::Trainer;
use mongodb::{bson::Document, Collection, Database};

use crate::error::StoreError;

const COLLECTION: &str = "trainers";

/// Narrow view of the document collection holding trainer records.
///
/// The roster service depends only on this trait, so the Mongo driver can
/// be swapped for an in-memory double. No operation retries; a single
/// backend failure surfaces to the caller as-is.
#[async_trait]
pub trait TrainerCollection: Send + Sync {
    async fn insert_many(&self, trainers: Vec<Trainer>) -> Result<(), StoreError>;

    async fn insert_one(&self, trainer: Trainer) -> Result<(), StoreError>;

    /// Deletes at most one matching document. Zero matches is not an error.
    async fn delete_one(&self, filter: Document) -> Result<(), StoreError>;

    /// Replaces at most one matching document wholesale. Zero matches is
    /// not an error.
    async fn replace_one(&self, filter: Document, replacement: Trainer)
        -> Result<(), StoreError>;

    /// Streams every document matching `filter`. The stream is finite and
    /// not restartable; a fresh call re-queries the store.
    async fn find_all(
        &self,
        filter: Document,
    ) -> Result<BoxStream<'static, Result<Trainer, StoreError>>, StoreError>;
}

#[derive(Clone)]
pub struct TrainerStore {
    store: Collection<Trainer>,
}

impl TrainerStore {
    pub(crate) fn new(db: &Database) -> Self {
        TrainerStore {
            store: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl TrainerCollection for TrainerStore {
    async fn insert_many(&self, trainers: Vec<Trainer>) -> Result<(), StoreError> {
        self.store.insert_many(trainers).await?;
        Ok(())
    }

    async fn insert_one(&self, trainer: Trainer) -> Result<(), StoreError> {
        self.store.insert_one(trainer).await?;
        Ok(())
    }

    async fn delete_one(&self, filter: Document) -> Result<(), StoreError> {
        self.store.delete_one(filter).await?;
        Ok(())
    }

    async fn replace_one(
        &self,
        filter: Document,
        replacement: Trainer,
    ) -> Result<(), StoreError> {
        self.store.replace_one(filter, replacement).await?;
        Ok(())
    }

    async fn find_all(
        &self,
        filter: Document,
    ) -> Result<BoxStream<'static, Result<Trainer, StoreError>>, StoreError> {
        let cursor = self.store.find(filter).await?;
        Ok(cursor.map_err(StoreError::from).boxed())
    }
}
