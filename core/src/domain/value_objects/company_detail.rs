//! Denormalized company views assembled by the directory service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::company::Company;
use crate::domain::entities::company_file::CompanyFile;
use crate::domain::entities::product::Product;

/// Company row with its files, used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyWithFiles {
    #[serde(flatten)]
    pub company: Company,
    pub files: Vec<CompanyFile>,
}

/// Full company profile
///
/// `score` and `one_comment` are `None` when the company has no reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub score: Option<f64>,
    pub one_comment: Option<String>,
    pub products: Vec<Product>,
    pub files: Vec<CompanyFile>,
}
