use std::sync::Arc;

use dotenv::dotenv;
use eyre::Context;
use log::info;

const MONGO_PORT: &str = "27017";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Err(err) = dotenv() {
        info!("Failed to load .env file: {}", err);
    }
    pretty_env_logger::init();
    color_eyre::install()?;

    let env = env::Env::load()?;

    info!("connecting to mongo on {}", env.db_host());
    let uri = format!("mongodb://{}:{}", env.db_host(), MONGO_PORT);
    let storage = storage::Storage::new(&uri)
        .await
        .context("Failed to create storage")?;

    let roster = roster::Roster::new(Arc::new(storage.trainers));
    roster
        .load(roster::default_trainers())
        .await
        .context("Failed to seed trainer collection")?;

    info!("starting server on port {}", env.port());
    web::serve(roster, env.port()).await?;

    Ok(())
}
