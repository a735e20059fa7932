//! Core Module - Infrastructure components of the application
//!
//! - Authentication and JWT
//! - Configuration
//! - Error handling
//! - Application state

pub mod auth;
pub mod config;
pub mod error;
pub mod state;

// Re-exports to make importing easier
pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt, require_admin};
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
