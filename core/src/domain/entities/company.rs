//! Company entity: a solar vendor listed in the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approval status of a company listing
///
/// Any status may be set to any other; there is no enforced state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    #[default]
    PendingApproval,
    Approved,
    Rejected,
}

impl CompanyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::PendingApproval => "pending_approval",
            CompanyStatus::Approved => "approved",
            CompanyStatus::Rejected => "rejected",
        }
    }

    /// Title and body pushed to the company owner when the status changes to this value
    pub fn notification_text(&self) -> Option<(&'static str, &'static str)> {
        match self {
            CompanyStatus::Approved => Some(("Aprobado", "Tu compañia ha sido aprobada")),
            CompanyStatus::Rejected => Some(("Rechazado", "Tu compañia ha sido rechazada")),
            CompanyStatus::PendingApproval => None,
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CompanyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_approval" => Ok(CompanyStatus::PendingApproval),
            "approved" => Ok(CompanyStatus::Approved),
            "rejected" => Ok(CompanyStatus::Rejected),
            other => Err(format!("Unknown company status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_id: Uuid,

    /// Owning user, mirrored by `User::company_id`
    pub user_id: Option<Uuid>,

    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub web_page: Option<String>,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub profile_picture: Option<String>,
    pub status: CompanyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when registering a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub web_page: Option<String>,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub profile_picture: Option<String>,
    /// Defaults to `pending_approval`
    pub status: Option<CompanyStatus>,
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub web_page: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub profile_picture: Option<String>,
    pub status: Option<CompanyStatus>,
}

impl Company {
    pub fn new(data: NewCompany) -> Self {
        let now = Utc::now();
        Self {
            company_id: Uuid::new_v4(),
            user_id: None,
            name: data.name,
            description: data.description,
            email: data.email,
            phone: data.phone,
            web_page: data.web_page,
            street: data.street,
            street_number: data.street_number,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            profile_picture: data.profile_picture,
            status: data.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a user already manages this company
    pub fn has_owner(&self) -> bool {
        self.user_id.is_some()
    }

    /// Apply a partial update, touching `updated_at`
    pub fn apply(&mut self, update: CompanyUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(street) = update.street {
            self.street = street;
        }
        if let Some(street_number) = update.street_number {
            self.street_number = street_number;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        if let Some(zip_code) = update.zip_code {
            self.zip_code = zip_code;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.web_page.is_some() {
            self.web_page = update.web_page;
        }
        if update.profile_picture.is_some() {
            self.profile_picture = update.profile_picture;
        }
        self.updated_at = Utc::now();
    }
}
