use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::research::Category;
use crate::sources::{GroundingMetadata, SourceLink};

/// The output of a literature review.
///
/// Immutable once created; the next successful review replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier for this report
    pub id: String,
    /// Topic as the user typed it
    pub topic: String,
    pub category: Category,
    /// Raw Markdown returned by the model
    pub summary: String,
    /// Citations from the grounded search, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grounding: Option<GroundingMetadata>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Creates a new report stamped with the current time.
    pub fn new(
        topic: impl Into<String>,
        category: Category,
        summary: impl Into<String>,
        grounding: Option<GroundingMetadata>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            topic: topic.into(),
            category,
            summary: summary.into(),
            grounding,
            created_at: Utc::now(),
        }
    }

    /// Local calendar date the report was generated, as `YYYY/MM/DD`.
    pub fn display_date(&self) -> String {
        self.created_at.with_timezone(&Local).format("%Y/%m/%d").to_string()
    }

    /// Deduplicated sources; empty when the answer was not grounded.
    pub fn sources(&self) -> Vec<SourceLink> {
        self.grounding.as_ref().map(GroundingMetadata::sources).unwrap_or_default()
    }
}
