//! EnquiryRepository - Repository for enquiries

use super::{Create, Read};
use crate::dtos::CreateEnquiryDTO;
use crate::entities::{Enquiry, EnquiryStatus};
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{info, instrument};

pub struct EnquiryRepository {
    connection_pool: SqlitePool,
}

impl EnquiryRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Newest first, optionally filtered by status
    pub async fn list(&self, status: Option<EnquiryStatus>) -> Result<Vec<Enquiry>, Error> {
        sqlx::query_as::<_, Enquiry>(
            r#"
            SELECT * FROM enquiries
            WHERE ?1 IS NULL OR status = ?1
            ORDER BY created_at DESC, enquiry_id DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self), fields(enquiry_id = %enquiry_id, status = ?status))]
    pub async fn update_status(
        &self,
        enquiry_id: &i64,
        status: EnquiryStatus,
    ) -> Result<Enquiry, Error> {
        let enquiry = sqlx::query_as::<_, Enquiry>(
            "UPDATE enquiries SET status = ?, updated_at = ? WHERE enquiry_id = ? RETURNING *",
        )
        .bind(status)
        .bind(Utc::now())
        .bind(enquiry_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)?;

        info!("Enquiry status updated");
        Ok(enquiry)
    }
}

impl Create<Enquiry, CreateEnquiryDTO> for EnquiryRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateEnquiryDTO) -> Result<Enquiry, Error> {
        let now = Utc::now();
        let enquiry = sqlx::query_as::<_, Enquiry>(
            r#"
            INSERT INTO enquiries
                (expert_id, project_id, name, email, phone, subject, message, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.expert_id)
        .bind(data.project_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.subject)
        .bind(&data.message)
        .bind(EnquiryStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Enquiry created with id {}", enquiry.enquiry_id);
        Ok(enquiry)
    }
}

impl Read<Enquiry, i64> for EnquiryRepository {
    async fn read(&self, id: &i64) -> Result<Option<Enquiry>, Error> {
        sqlx::query_as::<_, Enquiry>("SELECT * FROM enquiries WHERE enquiry_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
