use std::{env::var, sync::Arc};

use eyre::{Context, Error};

const DEFAULT_PORT: &str = "80";

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

struct EnvInner {
    db_host: String,
    port: String,
}

impl Env {
    pub fn db_host(&self) -> &str {
        &self.0.db_host
    }

    pub fn port(&self) -> &str {
        &self.0.port
    }

    /// Reads process configuration. `DBHOST` is required; the service
    /// refuses to start without it.
    pub fn load() -> Result<Env, Error> {
        Ok(Env(Arc::new(EnvInner {
            db_host: var("DBHOST").context("DBHOST is not set")?,
            port: var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
        })))
    }
}
