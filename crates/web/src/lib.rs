use axum::extract::Request;
use axum::http::header::HeaderName;
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use eyre::{Context as _, Result};
use log::info;
use roster::Roster;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

mod error;
mod trainers;

const STATIC_DIR: &str = "static";

/// The full application router: health probes, the trainer API, and the
/// static bundle on every other path.
pub fn app(roster: Roster) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/v1/healthz", get(health))
        .merge(trainers::routes(roster))
        .fallback_service(ServeDir::new(STATIC_DIR))
        .layer(cors())
        .layer(middleware::from_fn(access_log))
}

pub async fn serve(roster: Roster, port: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .context("Failed to bind server port")?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(roster)).await?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
            Method::DELETE,
        ])
        .allow_headers([HeaderName::from_static("x-requested-with")])
}

async fn health() -> impl IntoResponse {
    // Deploy pollers read the body, not the status code.
    (StatusCode::INTERNAL_SERVER_ERROR, "ok")
}

async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;
    info!("{} {} {}", method, path, response.status().as_u16());
    response
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use bson::{to_document, Document};
    use eyre::eyre;
    use futures_util::stream::{self, BoxStream};
    use futures_util::StreamExt as _;
    use model::Trainer;
    use std::sync::Mutex;
    use storage::error::StoreError;
    use storage::trainer::TrainerCollection;

    /// In-memory stand-in for the Mongo-backed trainer collection.
    #[derive(Default)]
    pub(crate) struct MemCollection {
        trainers: Mutex<Vec<Trainer>>,
        fail: bool,
    }

    impl MemCollection {
        pub(crate) fn with(trainers: Vec<Trainer>) -> Self {
            MemCollection {
                trainers: Mutex::new(trainers),
                fail: false,
            }
        }

        pub(crate) fn failing() -> Self {
            MemCollection {
                trainers: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub(crate) fn contents(&self) -> Vec<Trainer> {
            self.trainers.lock().unwrap().clone()
        }

        fn forced_err() -> StoreError {
            StoreError::Store(eyre!("this is a forced error"))
        }
    }

    #[async_trait]
    impl TrainerCollection for MemCollection {
        async fn insert_many(&self, trainers: Vec<Trainer>) -> Result<(), StoreError> {
            if self.fail {
                return Err(Self::forced_err());
            }
            self.trainers.lock().unwrap().extend(trainers);
            Ok(())
        }

        async fn insert_one(&self, trainer: Trainer) -> Result<(), StoreError> {
            if self.fail {
                return Err(Self::forced_err());
            }
            self.trainers.lock().unwrap().push(trainer);
            Ok(())
        }

        async fn delete_one(&self, filter: Document) -> Result<(), StoreError> {
            if self.fail {
                return Err(Self::forced_err());
            }
            let mut trainers = self.trainers.lock().unwrap();
            if let Some(pos) = trainers
                .iter()
                .position(|t| to_document(t).unwrap() == filter)
            {
                trainers.remove(pos);
            }
            Ok(())
        }

        async fn replace_one(
            &self,
            filter: Document,
            replacement: Trainer,
        ) -> Result<(), StoreError> {
            if self.fail {
                return Err(Self::forced_err());
            }
            let mut trainers = self.trainers.lock().unwrap();
            if let Some(pos) = trainers
                .iter()
                .position(|t| to_document(t).unwrap() == filter)
            {
                trainers[pos] = replacement;
            }
            Ok(())
        }

        async fn find_all(
            &self,
            _filter: Document,
        ) -> Result<BoxStream<'static, Result<Trainer, StoreError>>, StoreError> {
            if self.fail {
                return Err(Self::forced_err());
            }
            let trainers = self.trainers.lock().unwrap().clone();
            Ok(stream::iter(trainers.into_iter().map(Ok)).boxed())
        }
    }
}
