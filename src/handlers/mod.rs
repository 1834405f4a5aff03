pub mod inclusions;
pub mod packages;
pub mod reviews;

use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use crate::db::DbPool;

pub use inclusions::{create_inclusion, get_inclusion, update_inclusion};
pub use packages::{create_package, delete_package, get_package, list_packages, update_package};
pub use reviews::{create_review, list_reviews};

pub fn router(pool: DbPool) -> Router {
    Router::new()
        .route("/packages", post(create_package).get(list_packages))
        .route(
            "/packages/{id}",
            get(get_package).patch(update_package).delete(delete_package),
        )
        .route(
            "/packages/{id}/inclusion",
            get(get_inclusion).put(create_inclusion).patch(update_inclusion),
        )
        .route("/packages/{id}/reviews", post(create_review).get(list_reviews))
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
