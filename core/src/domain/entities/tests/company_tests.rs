use crate::domain::entities::company::{Company, CompanyStatus, CompanyUpdate, NewCompany};
use crate::domain::entities::company_file::{CompanyFile, NewCompanyFile};
use crate::domain::entities::notification::Notification;
use crate::domain::entities::review::ReviewSummary;
use uuid::Uuid;

fn sample() -> NewCompany {
    NewCompany {
        name: "SUNPOWER".to_string(),
        description: "Paneles solares residenciales".to_string(),
        email: "contacto@sunpower.mx".to_string(),
        phone: "8112345678".to_string(),
        street: "Av. Constitución".to_string(),
        street_number: "100".to_string(),
        city: "Monterrey".to_string(),
        state: "Nuevo León".to_string(),
        zip_code: "64000".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_new_company_defaults_to_pending() {
    let company = Company::new(sample());
    assert_eq!(company.status, CompanyStatus::PendingApproval);
    assert!(!company.has_owner());
}

#[test]
fn test_status_serializes_snake_case() {
    let json = serde_json::to_value(CompanyStatus::PendingApproval).unwrap();
    assert_eq!(json, "pending_approval");
    assert_eq!("approved".parse::<CompanyStatus>().unwrap(), CompanyStatus::Approved);
    assert!("archived".parse::<CompanyStatus>().is_err());
}

#[test]
fn test_company_serializes_camel_case() {
    let json = serde_json::to_value(Company::new(sample())).unwrap();
    assert_eq!(json["zipCode"], "64000");
    assert_eq!(json["streetNumber"], "100");
    assert!(json["userId"].is_null());
}

#[test]
fn test_apply_partial_update() {
    let mut company = Company::new(sample());
    company.apply(CompanyUpdate {
        city: Some("San Pedro".to_string()),
        status: Some(CompanyStatus::Rejected),
        ..Default::default()
    });

    assert_eq!(company.city, "San Pedro");
    assert_eq!(company.name, "SUNPOWER");
    assert_eq!(company.status, CompanyStatus::Rejected);
}

#[test]
fn test_any_status_can_follow_any_other() {
    let mut company = Company::new(sample());
    for status in [CompanyStatus::Rejected, CompanyStatus::Approved, CompanyStatus::PendingApproval] {
        company.apply(CompanyUpdate {
            status: Some(status),
            ..Default::default()
        });
        assert_eq!(company.status, status);
    }
}

#[test]
fn test_notification_for_status() {
    let company_id = Uuid::new_v4();
    let approved = Notification::for_status(CompanyStatus::Approved, company_id, "arn:test").unwrap();
    assert_eq!(approved.title, "Aprobado");
    assert_eq!(approved.body, "Tu compañia ha sido aprobada");
    assert_eq!(approved.company_id, company_id);

    let rejected = Notification::for_status(CompanyStatus::Rejected, company_id, "arn:test").unwrap();
    assert_eq!(rejected.title, "Rechazado");

    assert!(Notification::for_status(CompanyStatus::PendingApproval, company_id, "arn:test").is_none());
}

#[test]
fn test_file_format_inferred_from_url() {
    let file = CompanyFile::new(NewCompanyFile {
        company_id: Uuid::new_v4(),
        file_url: "https://cdn.greencircle.mx/files/certificado.PDF".to_string(),
        file_description: None,
        file_format: None,
    });
    assert_eq!(file.file_format.as_deref(), Some("pdf"));

    let file = CompanyFile::new(NewCompanyFile {
        company_id: Uuid::new_v4(),
        file_url: "https://cdn.greencircle.mx/files/abc".to_string(),
        file_description: None,
        file_format: None,
    });
    assert!(file.file_format.is_none());
}

#[test]
fn test_score_rounding() {
    let summary = ReviewSummary {
        average: 4.25,
        count: 4,
        comment: None,
    };
    assert_eq!(summary.rounded_score(), 4.3);

    let summary = ReviewSummary {
        average: 3.0 + 2.0 / 3.0,
        count: 3,
        comment: None,
    };
    assert_eq!(summary.rounded_score(), 3.7);
}
