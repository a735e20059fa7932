//! Query DTOs - Query string parameters

use crate::entities::{BookingStatus, EnquiryStatus, RelatedItemKind, TestimonialStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /bookings?status=...`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct BookingsQuery {
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

/// Pagination of `GET /conversations/{id}/messages`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct MessagesQuery {
    #[serde(default)]
    pub before_date: Option<DateTime<Utc>>,
}

/// `GET /enquiries?status=...`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct EnquiriesQuery {
    #[serde(default)]
    pub status: Option<EnquiryStatus>,
}

/// `GET /testimonials?featured=true&type=course`
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct TestimonialsQuery {
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, rename = "type")]
    pub kind: Option<RelatedItemKind>,
}

/// `GET /testimonials/moderation?status=...`, pending when omitted
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ModerationQuery {
    #[serde(default)]
    pub status: Option<TestimonialStatus>,
}
