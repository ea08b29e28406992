//! Complaint endpoints (`/api/v1/complaints`)

use actix_web::{web, HttpRequest, HttpResponse};
use gc_shared::types::Pagination;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::backend::Backend;
use crate::dto::CreateComplaintRequest;
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/complaints")
            .route("", web::get().to(get_all_complaints::<B>))
            .route("/create", web::post().to(create_complaint::<B>).wrap(JwtAuth::new()))
            .route("/company/{company_id}", web::get().to(get_complaints_by_company::<B>))
            .route("/user/{user_id}", web::get().to(get_complaints_by_user::<B>))
            .route("/{complaint_id}", web::get().to(get_complaint_by_id::<B>))
            .route(
                "/{complaint_id}/inactive",
                web::patch().to(flag_complaint_as_inactive::<B>).wrap(JwtAuth::new()),
            )
            .route(
                "/{complaint_id}/invalid",
                web::patch().to(flag_complaint_as_invalid::<B>).wrap(JwtAuth::new()),
            ),
    );
}

/// Handler for GET /api/v1/complaints
pub async fn get_all_complaints<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state.complaint_service.get_all_complaints(query.into_inner().validate()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/complaints/{complaintId}
///
/// Answers with the same page shape as the list endpoints, holding zero or
/// one row.
pub async fn get_complaint_by_id<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state
        .complaint_service
        .get_complaint_by_id(path.into_inner(), query.into_inner().validate())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/complaints/company/{companyId}
pub async fn get_complaints_by_company<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state
        .complaint_service
        .get_complaints_by_company(path.into_inner(), query.into_inner().validate())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/complaints/user/{userId}
pub async fn get_complaints_by_user<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state
        .complaint_service
        .get_complaints_by_user(path.into_inner(), query.into_inner().validate())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/complaints/create
pub async fn create_complaint<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    body: web::Json<CreateComplaintRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state
        .complaint_service
        .create_complaint(body.into_new_complaint(auth.user_id))
        .await
    {
        Ok(complaint) => HttpResponse::Created().json(complaint),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for PATCH /api/v1/complaints/{complaintId}/inactive
pub async fn flag_complaint_as_inactive<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let complaint_id = path.into_inner();
    match state.complaint_service.flag_complaint_as_inactive(complaint_id).await {
        Ok(complaint) => {
            log::info!("User {} flagged complaint {} as inactive", auth.user_id, complaint_id);
            HttpResponse::Ok().json(complaint)
        }
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for PATCH /api/v1/complaints/{complaintId}/invalid
pub async fn flag_complaint_as_invalid<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let complaint_id = path.into_inner();
    match state.complaint_service.flag_complaint_as_invalid(complaint_id).await {
        Ok(complaint) => {
            log::info!("User {} flagged complaint {} as invalid", auth.user_id, complaint_id);
            HttpResponse::Ok().json(complaint)
        }
        Err(error) => handle_domain_error(error, &req),
    }
}
