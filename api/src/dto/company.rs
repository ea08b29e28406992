use gc_core::domain::entities::{CompanyProduct, CompanyStatus, CompanyUpdate, NewCompany, NewCompanyFile};
use gc_shared::utils::validation::{PHONE_REGEX, ZIP_CODE_REGEX};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /company/create`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(email)]
    pub email: String,

    #[validate(regex = "PHONE_REGEX")]
    pub phone: String,

    #[validate(url)]
    pub web_page: Option<String>,

    #[validate(length(min = 1))]
    pub street: String,

    #[validate(length(min = 1))]
    pub street_number: String,

    #[validate(length(min = 1))]
    pub city: String,

    #[validate(length(min = 1))]
    pub state: String,

    #[validate(regex = "ZIP_CODE_REGEX")]
    pub zip_code: String,

    #[validate(url)]
    pub profile_picture: Option<String>,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(request: CreateCompanyRequest) -> Self {
        NewCompany {
            name: request.name.trim().to_string(),
            description: request.description,
            email: request.email,
            phone: request.phone,
            web_page: request.web_page,
            street: request.street,
            street_number: request.street_number,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            profile_picture: request.profile_picture,
            status: None,
        }
    }
}

/// Body of `POST /company/pending/{companyId}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(regex = "PHONE_REGEX")]
    pub phone: Option<String>,
    #[validate(url)]
    pub web_page: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(regex = "ZIP_CODE_REGEX")]
    pub zip_code: Option<String>,
    #[validate(url)]
    pub profile_picture: Option<String>,
    pub status: Option<CompanyStatus>,
}

impl From<UpdateCompanyRequest> for CompanyUpdate {
    fn from(request: UpdateCompanyRequest) -> Self {
        CompanyUpdate {
            name: request.name,
            description: request.description,
            email: request.email,
            phone: request.phone,
            web_page: request.web_page,
            street: request.street,
            street_number: request.street_number,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            profile_picture: request.profile_picture,
            status: request.status,
        }
    }
}

/// Body of `POST /company/add/product`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    pub company_id: Uuid,
    pub product_id: Uuid,
    #[validate(url)]
    pub pdf_product_certification_url: String,
}

impl From<AddProductRequest> for CompanyProduct {
    fn from(request: AddProductRequest) -> Self {
        CompanyProduct {
            company_id: request.company_id,
            product_id: request.product_id,
            pdf_product_certification_url: request.pdf_product_certification_url,
        }
    }
}

/// Body of `POST /company/upload/image`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageRequest {
    pub company_id: Uuid,
    #[validate(url)]
    pub image_url: String,
}

/// Body of `POST /company/upload/file`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest {
    pub company_id: Uuid,
    #[validate(url)]
    pub file_url: String,
    #[validate(length(max = 500))]
    pub file_description: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub file_format: Option<String>,
}

impl From<UploadFileRequest> for NewCompanyFile {
    fn from(request: UploadFileRequest) -> Self {
        NewCompanyFile {
            company_id: request.company_id,
            file_url: request.file_url,
            file_description: request.file_description,
            file_format: request.file_format,
        }
    }
}

/// Query of `GET /company/files`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilesQuery {
    pub company_id: Uuid,
}

/// Body of `PUT /company/{id}/assign`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserRequest {
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateCompanyRequest {
        CreateCompanyRequest {
            name: "Solaris MX".to_string(),
            description: "Paneles solares residenciales".to_string(),
            email: "ventas@solaris.mx".to_string(),
            phone: "+52 442 123 4567".to_string(),
            web_page: Some("https://solaris.mx".to_string()),
            street: "Av. Universidad".to_string(),
            street_number: "100".to_string(),
            city: "Querétaro".to_string(),
            state: "QRO".to_string(),
            zip_code: "76000".to_string(),
            profile_picture: None,
        }
    }

    #[test]
    fn test_valid_company_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_fields_are_reported() {
        let request = CreateCompanyRequest {
            email: "not-an-email".to_string(),
            zip_code: "7600".to_string(),
            ..valid_request()
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("zip_code"));
        assert!(!fields.contains_key("phone"));
    }

    #[test]
    fn test_update_accepts_status_only() {
        let request: UpdateCompanyRequest = serde_json::from_str(r#"{"status":"approved"}"#).unwrap();
        assert!(request.validate().is_ok());
        let update = CompanyUpdate::from(request);
        assert_eq!(update.status, Some(CompanyStatus::Approved));
        assert!(update.name.is_none());
    }
}
