//! Application state and factory
//!
//! [`AppState`] wires the core services for one [`Backend`];
//! [`create_app`] mounts every route under `/api/v1` with the shared
//! middleware stack.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::{JsonPayloadError, PathError, QueryPayloadError},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use gc_core::services::{
    AuthService, AuthServiceConfig, CompanyService, CompanyServiceConfig, ComplaintService, JwtCodec, ReviewService,
    TokenService, TokenServiceConfig,
};
use gc_infra::database::DatabasePool;
use gc_shared::config::AppConfig;
use gc_shared::types::{HealthResponse, HealthStatus};

use crate::backend::{Backend, BackendParts};
use crate::handlers::error::{not_found, payload_error_handler};
use crate::middleware::{create_cors, SecurityMiddleware};
use crate::routes;

pub type CompanyServiceFor<B> = CompanyService<
    <B as Backend>::Companies,
    <B as Backend>::Users,
    <B as Backend>::Reviews,
    <B as Backend>::Notifier,
>;
pub type ComplaintServiceFor<B> = ComplaintService<<B as Backend>::Complaints, <B as Backend>::Companies>;
pub type ReviewServiceFor<B> = ReviewService<<B as Backend>::Reviews, <B as Backend>::Companies>;
pub type AuthServiceFor<B> = AuthService<<B as Backend>::Users, <B as Backend>::Tokens, <B as Backend>::Google>;

/// Services shared by every worker
pub struct AppState<B: Backend> {
    pub company_service: Arc<CompanyServiceFor<B>>,
    pub complaint_service: Arc<ComplaintServiceFor<B>>,
    pub review_service: Arc<ReviewServiceFor<B>>,
    pub auth_service: Arc<AuthServiceFor<B>>,
    pub users: Arc<B::Users>,
    pub jwt_codec: JwtCodec,
    /// Present when running on MySQL; used by the health check
    pub database: Option<DatabasePool>,
}

impl<B: Backend> AppState<B> {
    pub fn new(parts: BackendParts<B>, config: &AppConfig) -> Self {
        let token_service = Arc::new(TokenService::new(parts.tokens, TokenServiceConfig::from(&config.auth.jwt)));
        let jwt_codec = token_service.codec().clone();

        let company_service = Arc::new(CompanyService::new(
            Arc::clone(&parts.companies),
            Arc::clone(&parts.users),
            Arc::clone(&parts.reviews),
            parts.notifier,
            CompanyServiceConfig::from(&config.notification),
        ));
        let complaint_service = Arc::new(ComplaintService::new(parts.complaints, Arc::clone(&parts.companies)));
        let review_service = Arc::new(ReviewService::new(parts.reviews, parts.companies));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&parts.users),
            token_service,
            parts.google,
            AuthServiceConfig::from(&config.auth),
        ));

        Self {
            company_service,
            complaint_service,
            review_service,
            auth_service,
            users: parts.users,
            jwt_codec,
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<B: Backend>(
    app_state: web::Data<AppState<B>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let jwt_codec = web::Data::new(app_state.jwt_codec.clone());

    App::new()
        .app_data(app_state)
        .app_data(jwt_codec)
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(payload_error_handler::<JsonPayloadError>),
        )
        .app_data(web::QueryConfig::default().error_handler(payload_error_handler::<QueryPayloadError>))
        .app_data(web::PathConfig::default().error_handler(payload_error_handler::<PathError>))
        .wrap(Logger::default())
        .wrap(create_cors(&config.cors))
        .wrap(SecurityMiddleware::for_environment(config.environment))
        .route("/health", web::get().to(health_check::<B>))
        .service(
            web::scope("/api/v1")
                .configure(routes::company::configure::<B>)
                .configure(routes::user::configure::<B>)
                .configure(routes::complaint::configure::<B>)
                .configure(routes::review::configure::<B>)
                .configure(routes::auth::configure::<B>),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check<B: Backend>(state: web::Data<AppState<B>>) -> HttpResponse {
    let mut services = HashMap::new();
    services.insert("api".to_string(), HealthStatus::Healthy);

    if let Some(pool) = &state.database {
        let status = match pool.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            Ok(false) => HealthStatus::Unhealthy,
            Err(e) => {
                log::warn!("Database health check failed: {}", e);
                HealthStatus::Unhealthy
            }
        };
        services.insert("database".to_string(), status);
    }

    let response = HealthResponse::from_services(services, env!("CARGO_PKG_VERSION"));
    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}
