use axum::{
    routing::get,
    Router,
};
use crate::handlers::role::{create_role, delete_role, get_role, list_roles, update_role};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(list_roles).post(create_role))
        .route("/roles/{id}", get(get_role).put(update_role).delete(delete_role))
}
