//! Services module - HTTP handlers, one sub-module per resource

pub mod auth;
pub mod booking;
pub mod conversation;
pub mod enquiry;
pub mod testimonial;
pub mod user;

// Re-exports to make importing easier
pub use auth::{login_user, register_user};
pub use booking::{create_booking, get_booking, list_bookings, update_booking_status};
pub use conversation::{
    get_conversation_messages, list_conversations, list_unread_messages, mark_message_read,
    send_message, start_conversation,
};
pub use enquiry::{create_enquiry, list_enquiries, update_enquiry_status};
pub use testimonial::{
    create_testimonial, list_for_moderation, list_testimonials, set_testimonial_featured,
    update_testimonial_status,
};
pub use user::{get_me, get_user_by_id, list_users, update_me, update_user_role};

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "message": "Server is running"
        })),
    )
}
