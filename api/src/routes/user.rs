//! User endpoints (`/api/v1/user`)

use actix_web::{web, HttpRequest, HttpResponse};
use gc_core::errors::DomainError;
use gc_core::repositories::UserRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::backend::Backend;
use crate::handlers::handle_domain_error;
use crate::middleware::{AuthContext, JwtAuth};

pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .route("/{id}", web::get().to(get_user_info::<B>))
            .route("/{id}/company", web::get().to(get_user_company::<B>))
            .route(
                "/{id}/company",
                web::delete().to(unbind_user_from_company::<B>).wrap(JwtAuth::new()),
            ),
    );
}

/// Handler for GET /api/v1/user/{id}
pub async fn get_user_info<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.users.find_by_id(path.into_inner()).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => handle_domain_error(DomainError::not_found("User"), &req),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for GET /api/v1/user/{id}/company
pub async fn get_user_company<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    match state.company_service.get_company_by_user_id(path.into_inner()).await {
        Ok(Some(company)) => HttpResponse::Ok().json(company),
        Ok(None) => handle_domain_error(DomainError::not_found("Company"), &req),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for DELETE /api/v1/user/{id}/company
///
/// Clears the binding on both the user and the company. Responds with the
/// company with its owner cleared.
pub async fn unbind_user_from_company<B: Backend>(
    req: HttpRequest,
    auth: AuthContext,
    state: web::Data<AppState<B>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = path.into_inner();
    match state.company_service.unbind_user_from_company(user_id).await {
        Ok(Some(company)) => {
            log::info!("User {} unbound user {} from company {}", auth.user_id, user_id, company.company_id);
            HttpResponse::Ok().json(company)
        }
        Ok(None) => handle_domain_error(DomainError::not_found("Company"), &req),
        Err(error) => handle_domain_error(error, &req),
    }
}
