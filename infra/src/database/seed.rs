//! Bootstrap data for development databases
//!
//! Loads three sample companies (one per status) and two reviews, and binds
//! the approved company to its sample owner. Every insert is idempotent, so
//! running the seed on each start is harmless.

use chrono::Utc;
use sqlx::MySqlPool;
use uuid::Uuid;

use gc_core::domain::entities::company::CompanyStatus;

use crate::InfrastructureError;

pub const SUNPOWER_ID: &str = "c1b0e7e0-0b1a-4e1a-9f1a-0e5a9a1b0e7e";
pub const EXEL_SOLAR_ID: &str = "a2b0e7e0-0b1a-4e1a-9f1a-0e5a9a1b0e7e";
pub const TESLA_ENERGY_ID: &str = "a2c0e7e0-0b1a-4e1a-9f1a-0e5a9a1b0e7e";
pub const SUNPOWER_OWNER_ID: &str = "8de45630-2e76-4d97-98c2-9ec0d1f3a5b8";

/// Row data for one seeded company
pub struct SeedCompany {
    pub company_id: &'static str,
    pub owner_id: Option<&'static str>,
    pub name: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub web_page: &'static str,
    pub street: &'static str,
    pub street_number: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub profile_picture: &'static str,
    pub status: CompanyStatus,
}

pub const SEED_COMPANIES: [SeedCompany; 3] = [
    SeedCompany {
        company_id: SUNPOWER_ID,
        owner_id: Some(SUNPOWER_OWNER_ID),
        name: "SUNPOWER",
        description: "Más potencia en condiciones del mundo real",
        email: "contact@sunpower.com",
        phone: "8453728592",
        web_page: "https://www.sunpower.com",
        street: "Las Lomas Verdes",
        street_number: "123",
        city: "Ciudad de México",
        state: "CDMX",
        zip_code: "72000",
        profile_picture: "https://upload.wikimedia.org/wikipedia/commons/thumb/9/90/Sunpower_logo.svg/2560px-Sunpower_logo.svg.png",
        status: CompanyStatus::Approved,
    },
    SeedCompany {
        company_id: EXEL_SOLAR_ID,
        owner_id: None,
        name: "Exel Solar",
        description: "Company 2 description",
        email: "company2@outlook.com",
        phone: "0123456799",
        web_page: "https://www.company2.com",
        street: "Company 2 street",
        street_number: "123",
        city: "Queretaro",
        state: "QRO",
        zip_code: "76152",
        profile_picture: "https://latam.apsystems.com/wp-content/uploads/2018/08/apsystems-exelsolar.png",
        status: CompanyStatus::Rejected,
    },
    SeedCompany {
        company_id: TESLA_ENERGY_ID,
        owner_id: None,
        name: "TESLA ENERGY",
        description: "Company 3 description",
        email: "company3@outlook.com",
        phone: "0126756789",
        web_page: "https://www.company3.com",
        street: "Company 3 street",
        street_number: "123",
        city: "Ciudad de México",
        state: "CDMX",
        zip_code: "76152",
        profile_picture: "https://cdn11.bigcommerce.com/s-3nrr5bfo5i/product_images/uploaded_images/tesla-logo.png",
        status: CompanyStatus::PendingApproval,
    },
];

/// Ratings seeded for SUNPOWER
pub const SEED_REVIEWS: [(u8, &str); 2] = [(5, "This is a comment"), (5, "This is a comment")];

/// Insert the bootstrap rows in one transaction
pub async fn seed_database(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    tracing::info!("Seeding database with bootstrap companies");

    let mut tx = pool.begin().await?;
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT IGNORE INTO users (user_id, role, company_id, first_name, last_name, email, created_at, updated_at)
        VALUES (?, 'company', ?, 'SunPower', 'Admin', 'owner@sunpower.com', ?, ?)
        "#,
    )
    .bind(SUNPOWER_OWNER_ID)
    .bind(SUNPOWER_ID)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for company in &SEED_COMPANIES {
        sqlx::query(
            r#"
            INSERT IGNORE INTO companies (
                company_id, user_id, name, description, email, phone, web_page, street,
                street_number, city, state, zip_code, profile_picture, status, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(company.company_id)
        .bind(company.owner_id)
        .bind(company.name)
        .bind(company.description)
        .bind(company.email)
        .bind(company.phone)
        .bind(company.web_page)
        .bind(company.street)
        .bind(company.street_number)
        .bind(company.city)
        .bind(company.state)
        .bind(company.zip_code)
        .bind(company.profile_picture)
        .bind(company.status.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE company_id = ?")
        .bind(SUNPOWER_ID)
        .fetch_one(&mut *tx)
        .await?;

    if existing == 0 {
        for (rating, comment) in SEED_REVIEWS {
            sqlx::query(
                r#"
                INSERT INTO reviews (review_id, user_id, company_id, rating, comment, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(Uuid::new_v4().to_string())
            .bind(SUNPOWER_ID)
            .bind(rating)
            .bind(comment)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    tracing::info!(companies = SEED_COMPANIES.len(), "Database seed completed");
    Ok(())
}
