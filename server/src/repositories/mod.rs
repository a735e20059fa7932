//! Repositories module - One repository per entity, all sharing the same connection pool
//!
//! Queries are built with `sqlx::query_as` and mapped through `FromRow`, so the crate
//! builds without a live database. Every write binds its own timestamps from `Utc::now()`
//! to keep a single RFC 3339 format in the TEXT columns; ordering and range filters
//! on those columns rely on it.

pub mod booking;
pub mod conversation;
pub mod enquiry;
pub mod message;
pub mod testimonial;
pub mod traits;
pub mod user;

// Re-export the traits to make importing easier
pub use traits::{Create, Read, Update};

// Re-export the repository structs
pub use booking::BookingRepository;
pub use conversation::ConversationRepository;
pub use enquiry::EnquiryRepository;
pub use message::MessageRepository;
pub use testimonial::TestimonialRepository;
pub use user::UserRepository;
