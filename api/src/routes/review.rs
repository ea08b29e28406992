//! Review endpoints (`/api/v1/reviews`)

use actix_web::{web, HttpRequest, HttpResponse};
use gc_shared::types::Pagination;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::backend::Backend;
use crate::dto::CreateReviewRequest;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("/company/{company_id}", web::get().to(get_reviews_by_company::<B>))
            .route("/create", web::post().to(create_review::<B>).wrap(JwtAuth::new())),
    );
}

/// Handler for GET /api/v1/reviews/company/{companyId}
pub async fn get_reviews_by_company<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state
        .review_service
        .get_reviews_by_company(path.into_inner(), query.into_inner().validate())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/reviews/create
pub async fn create_review<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    body: web::Json<CreateReviewRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.review_service.create_review(body.into_new_review(auth.user_id)).await {
        Ok(review) => HttpResponse::Created().json(review),
        Err(error) => handle_domain_error(error, &req),
    }
}
