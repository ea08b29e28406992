use gc_core::domain::entities::NewReview;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /reviews/create`; the author is the authenticated user
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub company_id: Uuid,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: String,
}

impl CreateReviewRequest {
    pub fn into_new_review(self, user_id: Uuid) -> NewReview {
        NewReview {
            user_id,
            company_id: self.company_id,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let request = |rating| CreateReviewRequest {
            company_id: Uuid::new_v4(),
            rating,
            comment: String::new(),
        };
        assert!(request(1).validate().is_ok());
        assert!(request(5).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(6).validate().is_err());
    }
}
