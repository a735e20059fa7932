//! Marketplace backend library - exposes the main modules for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export the main types to make importing easier
pub use core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes())
        .nest("/users", configure_user_routes(state.clone()))
        .nest("/bookings", configure_booking_routes(state.clone()))
        .nest("/conversations", configure_conversation_routes(state.clone()))
        .nest("/messages", configure_message_routes(state.clone()))
        .nest("/enquiries", configure_enquiry_routes(state.clone()))
        .nest("/testimonials", configure_testimonial_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Authentication routes (login, register)
fn configure_auth_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
}

/// Profile and user administration routes, all authenticated
fn configure_user_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_users))
        .route("/me", get(get_me).patch(update_me))
        .route("/{user_id}", get(get_user_by_id))
        .route("/{user_id}/role", patch(update_user_role))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_booking_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/{booking_id}", get(get_booking))
        .route("/{booking_id}/status", patch(update_booking_status))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_conversation_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_conversations).post(start_conversation))
        .route("/{conversation_id}/messages", get(get_conversation_messages))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

fn configure_message_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", post(send_message))
        .route("/unread", get(list_unread_messages))
        .route("/{message_id}/read", patch(mark_message_read))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}

/// Submitting an enquiry is public, reading and answering them is for admins
fn configure_enquiry_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    let auth = middleware::from_fn_with_state(state, authentication_middleware);

    Router::new()
        .route(
            "/",
            post(create_enquiry).get(list_enquiries.layer(auth.clone())),
        )
        .route(
            "/{enquiry_id}/status",
            patch(update_enquiry_status.layer(auth)),
        )
}

/// Approved testimonials are public, everything else needs a user (or an admin)
fn configure_testimonial_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use core::authentication_middleware;
    use services::*;

    let auth = middleware::from_fn_with_state(state, authentication_middleware);

    Router::new()
        .route(
            "/",
            get(list_testimonials).post(create_testimonial.layer(auth.clone())),
        )
        .route(
            "/moderation",
            get(list_for_moderation.layer(auth.clone())),
        )
        .route(
            "/{testimonial_id}/status",
            patch(update_testimonial_status.layer(auth.clone())),
        )
        .route(
            "/{testimonial_id}/featured",
            patch(set_testimonial_featured.layer(auth)),
        )
}
