use std::sync::Arc;

use gc_shared::types::Pagination;
use uuid::Uuid;

use crate::domain::entities::company::{Company, NewCompany};
use crate::domain::entities::review::NewReview;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::InMemoryStore;
use crate::services::review::ReviewService;

async fn setup() -> (ReviewService<InMemoryStore, InMemoryStore>, Company) {
    let store = InMemoryStore::new();
    let company = Company::new(NewCompany {
        name: "SUNPOWER".to_string(),
        ..Default::default()
    });
    store.insert_company(company.clone()).await;

    let store = Arc::new(store);
    (ReviewService::new(store.clone(), store), company)
}

fn review(company_id: Uuid, rating: u8) -> NewReview {
    NewReview {
        user_id: Uuid::new_v4(),
        company_id,
        rating,
        comment: "Muy buena atención".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_list_reviews() {
    let (service, company) = setup().await;

    service.create_review(review(company.company_id, 5)).await.unwrap();
    service.create_review(review(company.company_id, 3)).await.unwrap();

    let page = service
        .get_reviews_by_company(company.company_id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.rows.len(), 2);
}

#[tokio::test]
async fn test_rating_out_of_range() {
    let (service, company) = setup().await;

    for rating in [0, 6] {
        let err = service.create_review(review(company.company_id, rating)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationErr(ValidationError::OutOfRange { .. })));
    }
}

#[tokio::test]
async fn test_review_for_unknown_company() {
    let (service, _) = setup().await;

    let err = service.create_review(review(Uuid::new_v4(), 4)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
