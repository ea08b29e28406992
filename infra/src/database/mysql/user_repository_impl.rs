//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use gc_core::domain::entities::user::{User, UserRole};
use gc_core::errors::DomainError;
use gc_core::repositories::UserRepository;

use super::{db_error, get, get_optional_uuid, get_parsed, get_uuid};

const USER_COLUMNS: &str = r#"
    user_id, role, company_id, google_id, first_name, last_name, second_last_name, email,
    phone_number, age, state, gender, profile_picture, device_token, created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            user_id: get_uuid(row, "user_id")?,
            role: get_parsed::<UserRole>(row, "role")?,
            company_id: get_optional_uuid(row, "company_id")?,
            google_id: get(row, "google_id")?,
            first_name: get(row, "first_name")?,
            last_name: get(row, "last_name")?,
            second_last_name: get(row, "second_last_name")?,
            email: get(row, "email")?,
            phone_number: get(row, "phone_number")?,
            age: get(row, "age")?,
            state: get(row, "state")?,
            gender: get(row, "gender")?,
            profile_picture: get(row, "profile_picture")?,
            device_token: get(row, "device_token")?,
            created_at: get(row, "created_at")?,
            updated_at: get(row, "updated_at")?,
        })
    }

    async fn find_one(&self, column: &'static str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE {} = ? LIMIT 1", USER_COLUMNS, column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("user_id", user_id.to_string()).await
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DomainError> {
        self.find_one("google_id", google_id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        // The unicode_ci collation makes the comparison case-insensitive
        self.find_one("email", email.trim().to_string()).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                user_id, role, company_id, google_id, first_name, last_name, second_last_name,
                email, phone_number, age, state, gender, profile_picture, device_token,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.user_id.to_string())
            .bind(user.role.as_str())
            .bind(user.company_id.map(|id| id.to_string()))
            .bind(&user.google_id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.second_last_name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(user.age)
            .bind(&user.state)
            .bind(&user.gender)
            .bind(&user.profile_picture)
            .bind(&user.device_token)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Validation {
                    message: "Email already registered".to_string(),
                },
                _ => db_error("Failed to create user")(e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                role = ?, google_id = ?, first_name = ?, last_name = ?, second_last_name = ?,
                email = ?, phone_number = ?, age = ?, state = ?, gender = ?, profile_picture = ?,
                device_token = ?, updated_at = ?
            WHERE user_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(user.role.as_str())
            .bind(&user.google_id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.second_last_name)
            .bind(&user.email)
            .bind(&user.phone_number)
            .bind(user.age)
            .bind(&user.state)
            .bind(&user.gender)
            .bind(&user.profile_picture)
            .bind(&user.device_token)
            .bind(user.updated_at)
            .bind(user.user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }

        self.find_by_id(user.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }
}
