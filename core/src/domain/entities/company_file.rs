//! Documents attached to a company listing (certifications, brochures).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFile {
    pub company_file_id: Uuid,
    pub company_id: Uuid,
    pub file_url: String,
    pub file_description: Option<String>,
    pub file_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompanyFile {
    pub company_id: Uuid,
    pub file_url: String,
    pub file_description: Option<String>,
    pub file_format: Option<String>,
}

impl CompanyFile {
    pub fn new(data: NewCompanyFile) -> Self {
        let file_format = data.file_format.or_else(|| {
            data.file_url
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
                .filter(|ext| !ext.is_empty() && ext.len() <= 5 && !ext.contains('/'))
        });

        Self {
            company_file_id: Uuid::new_v4(),
            company_id: data.company_id,
            file_url: data.file_url,
            file_description: data.file_description,
            file_format,
        }
    }
}
