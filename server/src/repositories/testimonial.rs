//! TestimonialRepository - Repository for testimonials

use super::{Create, Read};
use crate::dtos::CreateTestimonialDTO;
use crate::entities::{RelatedItemKind, Testimonial, TestimonialStatus};
use chrono::Utc;
use sqlx::{Error, SqlitePool};
use tracing::{info, instrument};

pub struct TestimonialRepository {
    connection_pool: SqlitePool,
}

impl TestimonialRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Approved testimonials only, featured ones first
    pub async fn list_public(
        &self,
        featured: Option<bool>,
        kind: Option<RelatedItemKind>,
    ) -> Result<Vec<Testimonial>, Error> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials
            WHERE status = ?1
              AND (?2 IS NULL OR featured = ?2)
              AND (?3 IS NULL OR related_type = ?3)
            ORDER BY featured DESC, created_at DESC, testimonial_id DESC
            "#,
        )
        .bind(TestimonialStatus::Approved)
        .bind(featured)
        .bind(kind)
        .fetch_all(&self.connection_pool)
        .await
    }

    /// Moderation queue, oldest first
    pub async fn list_by_status(&self, status: TestimonialStatus) -> Result<Vec<Testimonial>, Error> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials WHERE status = ? ORDER BY created_at ASC, testimonial_id ASC",
        )
        .bind(status)
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self), fields(testimonial_id = %testimonial_id, status = ?status))]
    pub async fn update_status(
        &self,
        testimonial_id: &i64,
        status: TestimonialStatus,
    ) -> Result<Testimonial, Error> {
        let testimonial = sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials SET status = ?, updated_at = ? WHERE testimonial_id = ? RETURNING *",
        )
        .bind(status)
        .bind(Utc::now())
        .bind(testimonial_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)?;

        info!("Testimonial status updated");
        Ok(testimonial)
    }

    #[instrument(skip(self), fields(testimonial_id = %testimonial_id, featured = %featured))]
    pub async fn set_featured(&self, testimonial_id: &i64, featured: bool) -> Result<Testimonial, Error> {
        sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials SET featured = ?, updated_at = ? WHERE testimonial_id = ? RETURNING *",
        )
        .bind(featured)
        .bind(Utc::now())
        .bind(testimonial_id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)
    }
}

impl Create<Testimonial, CreateTestimonialDTO> for TestimonialRepository {
    #[instrument(skip(self, data), fields(author_id = %data.author_id, related = ?data.related_item))]
    async fn create(&self, data: &CreateTestimonialDTO) -> Result<Testimonial, Error> {
        let now = Utc::now();
        let testimonial = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials
                (author_id, content, rating, related_type, related_id, status, featured, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING *
            "#,
        )
        .bind(data.author_id)
        .bind(&data.content)
        .bind(data.rating)
        .bind(data.related_item.kind())
        .bind(data.related_item.id())
        .bind(TestimonialStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(&self.connection_pool)
        .await?;

        info!("Testimonial created with id {}", testimonial.testimonial_id);
        Ok(testimonial)
    }
}

impl Read<Testimonial, i64> for TestimonialRepository {
    async fn read(&self, id: &i64) -> Result<Option<Testimonial>, Error> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE testimonial_id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await
    }
}
