use gc_core::domain::entities::{ComplaintSubject, NewComplaint};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /complaints/create`; the author is the authenticated user
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    pub company_id: Uuid,
    pub complaint_subject: ComplaintSubject,
    #[validate(length(min = 1, max = 2000))]
    pub complaint_description: String,
}

impl CreateComplaintRequest {
    pub fn into_new_complaint(self, user_id: Uuid) -> NewComplaint {
        NewComplaint {
            user_id,
            company_id: self.company_id,
            complaint_subject: self.complaint_subject,
            complaint_description: self.complaint_description,
        }
    }
}
