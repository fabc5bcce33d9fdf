pub mod error;
pub mod trainer;

use eyre::{Context as _, Result};
use mongodb::{bson::doc, Client};
use trainer::TrainerStore;

const DB_NAME: &str = "test";

#[derive(Clone)]
pub struct Storage {
    _client: Client,
    pub trainers: TrainerStore,
}

impl Storage {
    /// Connects and pings the deployment. A storage handle is never
    /// constructed over a dead link.
    pub async fn new(uri: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .context("Failed to connect to MongoDB")?;
        let db = client.database(DB_NAME);
        db.run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB")?;
        let trainers = TrainerStore::new(&db);
        Ok(Storage {
            _client: client,
            trainers,
        })
    }
}
