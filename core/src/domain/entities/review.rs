//! Customer reviews and their per-company aggregate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub rating: u8,
    pub comment: String,
}

impl Review {
    pub fn new(data: NewReview) -> Self {
        let now = Utc::now();
        Self {
            review_id: Uuid::new_v4(),
            user_id: data.user_id,
            company_id: data.company_id,
            rating: data.rating,
            comment: data.comment,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Aggregate over all reviews of one company
///
/// Repositories return `None` instead of a summary when the company has no
/// reviews, so `average` is always backed by at least one rating.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub average: f64,
    pub count: u64,
    /// One representative comment (the most recent)
    pub comment: Option<String>,
}

impl ReviewSummary {
    /// Average rounded to one decimal place, as shown in the directory
    pub fn rounded_score(&self) -> f64 {
        (self.average * 10.0).round() / 10.0
    }
}
