//! Company directory endpoints (`/api/v1/company`)

use actix_web::{web, HttpRequest, HttpResponse};
use gc_core::domain::entities::CompanyStatus;
use gc_core::errors::DomainError;
use gc_shared::types::{MessageResponse, Pagination};
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::backend::Backend;
use crate::dto::{
    AddProductRequest, AssignUserRequest, CompanyFilesQuery, CreateCompanyRequest, UpdateCompanyRequest,
    UploadFileRequest, UploadImageRequest,
};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/company")
            .route("", web::get().to(get_all_companies::<B>))
            .route("/create", web::post().to(create_company::<B>).wrap(JwtAuth::new()))
            .route("/files", web::get().to(get_company_files::<B>))
            .route("/add/product", web::post().to(add_product::<B>).wrap(JwtAuth::new()))
            .route("/upload/image", web::post().to(upload_image::<B>).wrap(JwtAuth::new()))
            .route("/upload/file", web::post().to(upload_file::<B>).wrap(JwtAuth::new()))
            .route("/approved", web::get().to(get_approved_companies::<B>))
            .route("/pending", web::get().to(get_pending_companies::<B>))
            .route(
                "/pending/{company_id}",
                web::post().to(update_company_info::<B>).wrap(JwtAuth::new()),
            )
            .route("/{id}", web::get().to(get_company_by_id::<B>))
            .route("/{id}/assign", web::put().to(assign_company_user::<B>).wrap(JwtAuth::new())),
    );
}

/// Handler for GET /api/v1/company
pub async fn get_all_companies<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    match state.company_service.get_all_companies(query.into_inner().validate()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/company/approved
pub async fn get_approved_companies<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    companies_by_status(&req, &state, CompanyStatus::Approved, query.into_inner()).await
}

/// Handler for GET /api/v1/company/pending
pub async fn get_pending_companies<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    query: web::Query<Pagination>,
) -> HttpResponse {
    companies_by_status(&req, &state, CompanyStatus::PendingApproval, query.into_inner()).await
}

async fn companies_by_status<B: Backend>(
    req: &HttpRequest,
    state: &AppState<B>,
    status: CompanyStatus,
    pagination: Pagination,
) -> HttpResponse {
    match state
        .company_service
        .get_companies_by_status(status, pagination.validate())
        .await
    {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(error) => handle_domain_error(error, req),
    }
}

/// Handler for GET /api/v1/company/{id}
///
/// The profile carries `score` and `oneComment`, both `null` while the
/// company has no reviews.
pub async fn get_company_by_id<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.company_service.get_company_by_id(path.into_inner()).await {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => handle_domain_error(DomainError::not_found("Company"), &req),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/company/files?companyId=
pub async fn get_company_files<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    query: web::Query<CompanyFilesQuery>,
) -> HttpResponse {
    match state.company_service.get_company_files(query.company_id).await {
        Ok(files) => HttpResponse::Ok().json(files),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/company/create
pub async fn create_company<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    body: web::Json<CreateCompanyRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.company_service.create_company(body.into()).await {
        Ok(company) => {
            log::info!("User {} registered company {}", auth.user_id, company.company_id);
            HttpResponse::Created().json(company)
        }
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/company/pending/{companyId}
///
/// Moving a company to `approved` or `rejected` pushes a notification to its
/// owner; a failed push does not fail the update.
pub async fn update_company_info<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCompanyRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    let company_id = path.into_inner();
    match state.company_service.update_company_info(company_id, body.into()).await {
        Ok(Some(company)) => {
            log::info!(
                "User {} updated company {} (status {})",
                auth.user_id,
                company_id,
                company.status
            );
            HttpResponse::Ok().json(company)
        }
        Ok(None) => handle_domain_error(DomainError::not_found("Company"), &req),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/company/add/product
pub async fn add_product<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: web::Json<AddProductRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.company_service.add_product(body.into()).await {
        Ok(company_product) => HttpResponse::Created().json(company_product),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/company/upload/image
pub async fn upload_image<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: web::Json<UploadImageRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state
        .company_service
        .update_profile_picture(body.company_id, body.image_url)
        .await
    {
        Ok(company) => HttpResponse::Ok().json(company),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/company/upload/file
pub async fn upload_file<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: web::Json<UploadFileRequest>,
) -> HttpResponse {
    let body = body.into_inner();
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, &req);
    }

    match state.company_service.add_company_file(body.into()).await {
        Ok(file) => HttpResponse::Created().json(file),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for PUT /api/v1/company/{id}/assign
///
/// Binds the user in the body to the company. Conflicts and missing records
/// answer with the literal messages the clients match on.
pub async fn assign_company_user<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
    body: web::Json<AssignUserRequest>,
) -> HttpResponse {
    let company_id = path.into_inner();
    match state
        .company_service
        .assign_company_user(company_id, body.user_id)
        .await
    {
        Ok(()) => {
            log::info!("User {} assigned user {} to company {}", auth.user_id, body.user_id, company_id);
            HttpResponse::Ok().json(MessageResponse::new("success"))
        }
        Err(error) => handle_domain_error(error.into(), &req),
    }
}
