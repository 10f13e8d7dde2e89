mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::API;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{health, routes};

pub type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes", post(routes::create))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(Arc::new(api));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
