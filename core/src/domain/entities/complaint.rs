//! Complaints filed by users against companies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of complaint categories shown in the mobile apps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintSubject {
    #[serde(rename = "Productos Defectuosos")]
    DefectiveProducts,
    #[serde(rename = "Inconformidad con el producto / servicio")]
    Dissatisfaction,
    #[serde(rename = "Comportamiento Inapropiado")]
    InappropriateBehavior,
    #[serde(rename = "Mal Servicio")]
    PoorService,
    #[serde(rename = "Fraudes o estafas")]
    Fraud,
    #[serde(rename = "Violación legal o ética")]
    LegalOrEthicalViolation,
}

impl ComplaintSubject {
    pub const ALL: [ComplaintSubject; 6] = [
        ComplaintSubject::DefectiveProducts,
        ComplaintSubject::Dissatisfaction,
        ComplaintSubject::InappropriateBehavior,
        ComplaintSubject::PoorService,
        ComplaintSubject::Fraud,
        ComplaintSubject::LegalOrEthicalViolation,
    ];

    /// Label stored in the database and sent over the wire
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintSubject::DefectiveProducts => "Productos Defectuosos",
            ComplaintSubject::Dissatisfaction => "Inconformidad con el producto / servicio",
            ComplaintSubject::InappropriateBehavior => "Comportamiento Inapropiado",
            ComplaintSubject::PoorService => "Mal Servicio",
            ComplaintSubject::Fraud => "Fraudes o estafas",
            ComplaintSubject::LegalOrEthicalViolation => "Violación legal o ética",
        }
    }
}

impl std::str::FromStr for ComplaintSubject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComplaintSubject::ALL
            .into_iter()
            .find(|subject| subject.label() == s)
            .ok_or_else(|| format!("Unknown complaint subject: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplaintStatus {
    #[default]
    Open,
    Inactive,
    Invalid,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::Inactive => "inactive",
            ComplaintStatus::Invalid => "invalid",
        }
    }
}

impl std::str::FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ComplaintStatus::Open),
            "inactive" => Ok(ComplaintStatus::Inactive),
            "invalid" => Ok(ComplaintStatus::Invalid),
            other => Err(format!("Unknown complaint status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complaint_id: Uuid,
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub complaint_subject: ComplaintSubject,
    pub complaint_description: String,
    pub complaint_status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaint {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub complaint_subject: ComplaintSubject,
    pub complaint_description: String,
}

impl Complaint {
    pub fn new(data: NewComplaint) -> Self {
        let now = Utc::now();
        Self {
            complaint_id: Uuid::new_v4(),
            user_id: data.user_id,
            company_id: data.company_id,
            complaint_subject: data.complaint_subject,
            complaint_description: data.complaint_description,
            complaint_status: ComplaintStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Name of the user who filed a complaint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintAuthor {
    pub first_name: String,
    pub last_name: String,
}

/// Complaint row as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintView {
    #[serde(flatten)]
    pub complaint: Complaint,

    /// `None` when the author account no longer exists
    pub user: Option<ComplaintAuthor>,
}
