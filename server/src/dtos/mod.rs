//! DTOs module - Data Transfer Objects
//!
//! DTOs separate what the API accepts and returns from the persisted entities.
//! Request DTOs carry the validation rules; handlers call `validate()` before touching storage.

pub mod booking;
pub mod conversation;
pub mod enquiry;
pub mod message;
pub mod query;
pub mod testimonial;
pub mod user;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// 24h clock, "HH:MM"
    pub(crate) static ref TIME_OF_DAY: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    pub(crate) static ref PHONE_NUMBER: Regex = Regex::new(r"^\+?[0-9 ()\-]{7,20}$").unwrap();
}

// Re-exports
pub use booking::{BookingRequestDTO, CreateBookingDTO, UpdateBookingStatusDTO};
pub use conversation::{ConversationDTO, StartConversationDTO};
pub use enquiry::{CreateEnquiryDTO, UpdateEnquiryStatusDTO};
pub use message::{CreateMessageDTO, SendMessageDTO};
pub use query::{BookingsQuery, EnquiriesQuery, MessagesQuery, ModerationQuery, TestimonialsQuery};
pub use testimonial::{
    CreateTestimonialDTO, TestimonialRequestDTO, UpdateFeaturedDTO, UpdateTestimonialStatusDTO,
};
pub use user::{
    CreateUserDTO, LoginResponseDTO, PublicUserDTO, UpdateRoleDTO, UpdateUserDTO, UserDTO,
};
