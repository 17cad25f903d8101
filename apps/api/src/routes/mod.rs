pub mod health;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::hospitals::handlers as hospitals;
use crate::search::handlers as search;
use crate::snakes::handlers as snakes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Snake catalogue
        .route(
            "/api/v1/snakes",
            get(snakes::handle_list_snakes).post(snakes::handle_create_snake),
        )
        .route("/api/v1/snakes/search", get(search::handle_snake_search))
        .route(
            "/api/v1/snakes/:id",
            get(snakes::handle_get_snake)
                .put(snakes::handle_replace_snake)
                .patch(snakes::handle_patch_snake)
                .delete(snakes::handle_delete_snake),
        )
        // Hospital directory
        .route(
            "/api/v1/hospitals",
            get(hospitals::handle_list_approved).post(hospitals::handle_register_hospital),
        )
        .route(
            "/api/v1/hospitals/nearest",
            get(search::handle_nearest_hospitals),
        )
        .route(
            "/api/v1/hospitals/:id",
            get(hospitals::handle_get_hospital).delete(hospitals::handle_delete_hospital),
        )
        .route(
            "/api/v1/hospitals/:id/approval",
            patch(hospitals::handle_set_approval),
        )
        .with_state(state)
}
