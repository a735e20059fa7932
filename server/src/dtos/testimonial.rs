//! Testimonial DTOs - Data Transfer Objects for testimonials

use crate::entities::{RelatedItem, TestimonialStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /testimonials`; the author is the authenticated user
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct TestimonialRequestDTO {
    #[validate(length(min = 10, max = 1000, message = "Content must be between 10 and 1000 characters"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,

    pub related_item: RelatedItem,
}

/// DTO for creating a new testimonial (without id, status and featured flag)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateTestimonialDTO {
    pub author_id: i64,
    pub content: String,
    pub rating: i64,
    pub related_item: RelatedItem,
}

impl CreateTestimonialDTO {
    pub fn for_author(author_id: i64, request: TestimonialRequestDTO) -> Self {
        Self {
            author_id,
            content: request.content,
            rating: request.rating,
            related_item: request.related_item,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateTestimonialStatusDTO {
    pub status: TestimonialStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateFeaturedDTO {
    pub featured: bool,
}
