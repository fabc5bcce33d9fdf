use std::sync::Arc;

use bson::doc;
use futures_util::TryStreamExt as _;
use model::Trainer;
use storage::error::StoreError;
use storage::trainer::TrainerCollection;

/// The reference set a fresh deployment starts with.
pub fn default_trainers() -> Vec<Trainer> {
    vec![
        Trainer::new("Ash", 20, "Pallet Town"),
        Trainer::new("Misty", 22, "Cerulean City"),
        Trainer::new("Brock", 35, "Pewter City"),
    ]
}

/// Domain operations over the trainer collection.
///
/// Holds no state of its own; every call goes straight to the backing
/// collection, so concurrent requests coordinate only through the store.
#[derive(Clone)]
pub struct Roster {
    trainers: Arc<dyn TrainerCollection>,
}

impl Roster {
    pub fn new(trainers: Arc<dyn TrainerCollection>) -> Self {
        Roster { trainers }
    }

    /// Seeds the collection with `trainers`, but only when it is empty.
    /// Existing data wins, so re-running is a no-op.
    pub async fn load(&self, trainers: Vec<Trainer>) -> Result<(), StoreError> {
        let existing = self.list().await?;
        if !existing.is_empty() {
            return Ok(());
        }
        self.trainers.insert_many(trainers).await
    }

    /// Every trainer in the collection, in store iteration order.
    pub async fn list(&self) -> Result<Vec<Trainer>, StoreError> {
        let stream = self.trainers.find_all(doc! {}).await?;
        stream.try_collect().await
    }

    pub async fn create(&self, trainer: Trainer) -> Result<(), StoreError> {
        self.trainers.insert_one(trainer).await
    }

    /// Removes the record whose fields all equal `trainer`. Succeeds when
    /// nothing matches.
    pub async fn delete(&self, trainer: &Trainer) -> Result<(), StoreError> {
        self.trainers.delete_one(trainer.filter()?).await
    }

    /// Overwrites the record matching `original` with `replacement`.
    /// Succeeds when nothing matches.
    pub async fn update(&self, original: &Trainer, replacement: Trainer) -> Result<(), StoreError> {
        self.trainers
            .replace_one(original.filter()?, replacement)
            .await
    }
}
