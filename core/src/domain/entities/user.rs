//! User entity representing a registered GreenCircle account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of the account within the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// End user browsing companies and leaving reviews
    #[default]
    Customer,
    /// Account that manages a vendor company
    Company,
    /// Back-office operator using the admin dashboard
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Company => "company",
            UserRole::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserRole::Customer),
            "company" => Ok(UserRole::Company),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("Unknown user role: {}", other)),
        }
    }
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Uuid,

    pub role: UserRole,

    /// Company bound to this user, mirrored by `Company::user_id`
    pub company_id: Option<Uuid>,

    /// Google account subject (`sub` claim)
    #[serde(skip_serializing, default)]
    pub google_id: Option<String>,

    pub first_name: String,
    pub last_name: String,
    pub second_last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub age: Option<u16>,
    pub state: Option<String>,
    pub gender: Option<String>,
    pub profile_picture: Option<String>,

    /// Push notification device token
    #[serde(skip_serializing, default)]
    pub device_token: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to register a user
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub role: UserRole,
    pub google_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profile_picture: Option<String>,
}

impl User {
    pub fn new(data: NewUser) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4(),
            role: data.role,
            company_id: None,
            google_id: data.google_id,
            first_name: data.first_name,
            last_name: data.last_name,
            second_last_name: None,
            email: data.email,
            phone_number: None,
            age: None,
            state: None,
            gender: None,
            profile_picture: data.profile_picture,
            device_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the user already manages a company
    pub fn has_company(&self) -> bool {
        self.company_id.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Attach a Google subject to an account first created by email
    pub fn link_google_account(&mut self, google_id: impl Into<String>) {
        self.google_id = Some(google_id.into());
        self.updated_at = Utc::now();
    }

    pub fn full_name(&self) -> String {
        match &self.second_last_name {
            Some(second) => format!("{} {} {}", self.first_name, self.last_name, second),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}
