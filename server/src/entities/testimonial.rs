//! Testimonial entity - Review written by a user about a project, course or service

use super::enums::{RelatedItemKind, TestimonialStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// What a testimonial is about.
/// Serialized as `{ "type": "project", "id": 7 }`; stored as `related_type` + `related_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum RelatedItem {
    Project(i64),
    Course(i64),
    Service(i64),
}

impl RelatedItem {
    pub fn from_parts(kind: RelatedItemKind, id: i64) -> Self {
        match kind {
            RelatedItemKind::Project => Self::Project(id),
            RelatedItemKind::Course => Self::Course(id),
            RelatedItemKind::Service => Self::Service(id),
        }
    }

    pub fn kind(&self) -> RelatedItemKind {
        match self {
            Self::Project(_) => RelatedItemKind::Project,
            Self::Course(_) => RelatedItemKind::Course,
            Self::Service(_) => RelatedItemKind::Service,
        }
    }

    pub fn id(&self) -> i64 {
        match *self {
            Self::Project(id) | Self::Course(id) | Self::Service(id) => id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Testimonial {
    pub testimonial_id: i64,
    pub author_id: i64,
    pub content: String,
    pub rating: i64,
    pub related_item: RelatedItem,
    pub status: TestimonialStatus,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, SqliteRow> for Testimonial {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let kind: RelatedItemKind = row.try_get("related_type")?;
        let related_id: i64 = row.try_get("related_id")?;

        Ok(Self {
            testimonial_id: row.try_get("testimonial_id")?,
            author_id: row.try_get("author_id")?,
            content: row.try_get("content")?,
            rating: row.try_get("rating")?,
            related_item: RelatedItem::from_parts(kind, related_id),
            status: row.try_get("status")?,
            featured: row.try_get("featured")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_item_wire_format() {
        let item = RelatedItem::Course(12);
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "course", "id": 12 }));

        let back: RelatedItem =
            serde_json::from_value(serde_json::json!({ "type": "service", "id": 3 })).unwrap();
        assert_eq!(back, RelatedItem::Service(3));
    }

    #[test]
    fn unknown_related_type_is_rejected() {
        let res = serde_json::from_value::<RelatedItem>(serde_json::json!({ "type": "blog", "id": 1 }));
        assert!(res.is_err());
    }

    #[test]
    fn parts_roundtrip() {
        for item in [RelatedItem::Project(1), RelatedItem::Course(2), RelatedItem::Service(3)] {
            assert_eq!(RelatedItem::from_parts(item.kind(), item.id()), item);
        }
    }
}
