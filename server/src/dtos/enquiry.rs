//! Enquiry DTOs - Data Transfer Objects for enquiries

use super::PHONE_NUMBER;
use crate::entities::EnquiryStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /enquiries`, stored as is
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateEnquiryDTO {
    pub expert_id: Option<i64>,
    pub project_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_NUMBER, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Subject cannot exceed 200 characters"))]
    pub subject: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateEnquiryStatusDTO {
    pub status: EnquiryStatus,
}
