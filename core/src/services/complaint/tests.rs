use std::sync::Arc;

use gc_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::company::{Company, NewCompany};
use crate::domain::entities::complaint::{ComplaintStatus, ComplaintSubject, NewComplaint};
use crate::domain::entities::user::{NewUser, User};
use crate::errors::{ComplaintError, DomainError};
use crate::repositories::InMemoryStore;
use crate::services::complaint::ComplaintService;

fn create_service(store: &InMemoryStore) -> ComplaintService<InMemoryStore, InMemoryStore> {
    let store = Arc::new(store.clone());
    ComplaintService::new(store.clone(), store)
}

async fn seed(store: &InMemoryStore) -> (User, Company) {
    let user = User::new(NewUser {
        first_name: "Carla".to_string(),
        last_name: "Ruiz".to_string(),
        email: "carla@example.com".to_string(),
        ..Default::default()
    });
    store.insert_user(user.clone()).await;

    let company = Company::new(NewCompany {
        name: "SUNPOWER".to_string(),
        ..Default::default()
    });
    store.insert_company(company.clone()).await;

    (user, company)
}

fn complaint_for(user: &User, company: &Company, description: &str) -> NewComplaint {
    NewComplaint {
        user_id: user.user_id,
        company_id: company.company_id,
        complaint_subject: ComplaintSubject::PoorService,
        complaint_description: description.to_string(),
    }
}

#[tokio::test]
async fn test_create_complaint_is_open() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;

    let complaint = service
        .create_complaint(complaint_for(&user, &company, "No respondieron la garantía"))
        .await
        .unwrap();

    assert_eq!(complaint.complaint_status, ComplaintStatus::Open);
}

#[tokio::test]
async fn test_create_complaint_validation() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;

    let err = service
        .create_complaint(complaint_for(&user, &company, "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ValidationErr(_)));

    let mut unknown_company = complaint_for(&user, &company, "Texto");
    unknown_company.company_id = Uuid::new_v4();
    let err = service.create_complaint(unknown_company).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_all_complaints_first_page() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;

    for i in 0..12 {
        service
            .create_complaint(complaint_for(&user, &company, &format!("Queja {}", i)))
            .await
            .unwrap();
    }

    let page = service.get_all_complaints(Pagination::new(0, 10)).await.unwrap();
    assert_eq!(page.rows.len(), 10);
    assert_eq!(page.total, 12);
    assert_eq!(page.start, 0);
    assert_eq!(page.page_size, 10);

    let author = page.rows[0].user.as_ref().unwrap();
    assert_eq!(author.first_name, "Carla");

    let rest = service.get_all_complaints(Pagination::new(10, 10)).await.unwrap();
    assert_eq!(rest.rows.len(), 2);
}

#[tokio::test]
async fn test_complaints_by_company_and_user() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;
    service
        .create_complaint(complaint_for(&user, &company, "Instalación incompleta"))
        .await
        .unwrap();

    let by_company = service
        .get_complaints_by_company(company.company_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(by_company.total, 1);

    let by_user = service
        .get_complaints_by_user(user.user_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(by_user.total, 1);

    let other = service
        .get_complaints_by_user(Uuid::new_v4(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(other.total, 0);
    assert!(other.rows.is_empty());
}

#[tokio::test]
async fn test_get_complaint_by_id_page() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;
    let complaint = service
        .create_complaint(complaint_for(&user, &company, "Cobro doble"))
        .await
        .unwrap();

    let page = service
        .get_complaint_by_id(complaint.complaint_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].complaint.complaint_id, complaint.complaint_id);

    let empty = service
        .get_complaint_by_id(Uuid::new_v4(), Pagination::default())
        .await
        .unwrap();
    assert_eq!(empty.total, 0);
}

#[tokio::test]
async fn test_flag_complaint() {
    let store = InMemoryStore::new();
    let service = create_service(&store);
    let (user, company) = seed(&store).await;
    let complaint = service
        .create_complaint(complaint_for(&user, &company, "Cobro doble"))
        .await
        .unwrap();

    let inactive = service.flag_complaint_as_inactive(complaint.complaint_id).await.unwrap();
    assert_eq!(inactive.complaint_status, ComplaintStatus::Inactive);

    let invalid = service.flag_complaint_as_invalid(complaint.complaint_id).await.unwrap();
    assert_eq!(invalid.complaint_status, ComplaintStatus::Invalid);
}

#[tokio::test]
async fn test_flag_missing_complaint() {
    let service = create_service(&InMemoryStore::new());

    let err = service.flag_complaint_as_invalid(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::Complaint(ComplaintError::NotFound)));
    assert_eq!(err.to_string(), "Complaint not found.");
}
