//! Push notification payload sent when a company's status changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::company::CompanyStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Destination (SNS topic or platform endpoint ARN)
    pub target_arn: String,
    pub company_id: Uuid,
}

impl Notification {
    /// Build the approval/rejection notification, if the status warrants one
    pub fn for_status(status: CompanyStatus, company_id: Uuid, target_arn: &str) -> Option<Self> {
        status.notification_text().map(|(title, body)| Self {
            title: title.to_string(),
            body: body.to_string(),
            target_arn: target_arn.to_string(),
            company_id,
        })
    }
}
