use axum::{Router, routing::get};

use crate::modules::users::controller::{
    delete_user, list_users, register_user, retrieve_documents, retrieve_user, update_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(register_user))
        .route(
            "/{id}",
            get(retrieve_user).put(update_user).delete(delete_user),
        )
        .route("/{id}/documents", get(retrieve_documents))
}
