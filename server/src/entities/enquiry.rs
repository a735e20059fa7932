//! Enquiry entity - Contact request sent from the marketplace, optionally about an expert or project

use super::enums::EnquiryStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Enquiry {
    pub enquiry_id: i64,
    pub expert_id: Option<i64>,
    pub project_id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub status: EnquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
