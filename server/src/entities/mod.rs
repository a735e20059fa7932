//! Entities module - Domain entities of the marketplace
//!
//! Each entity maps to one table. Invariants that must hold on every write path
//! live on the types themselves (see [`ParticipantPair`] and [`RelatedItem`]).

pub mod booking;
pub mod conversation;
pub mod enquiry;
pub mod enums;
pub mod error;
pub mod message;
pub mod testimonial;
pub mod user;

// Re-exports to make importing easier
pub use booking::Booking;
pub use conversation::{Conversation, ParticipantPair};
pub use enquiry::Enquiry;
pub use enums::{BookingStatus, EnquiryStatus, RelatedItemKind, TestimonialStatus, UserRole};
pub use error::InvariantError;
pub use message::Message;
pub use testimonial::{RelatedItem, Testimonial};
pub use user::{User, normalize_email};
