//! Products offered by companies and their association rows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog product (panel, inverter, battery, installation service...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Join row between a company and a product it offers
///
/// No uniqueness is enforced on `(company_id, product_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProduct {
    pub company_id: Uuid,
    pub product_id: Uuid,
    pub pdf_product_certification_url: String,
}
