//! JWT authentication middleware for protected endpoints.
//!
//! The middleware reads `Authorization: Bearer <token>`, verifies it with the
//! [`JwtCodec`] registered as app data and stores an [`AuthContext`] in the
//! request extensions. Rejections are JSON error bodies with status 401.

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use gc_core::domain::entities::{Claims, UserRole};
use gc_core::services::JwtCodec;
use gc_shared::errors::error_codes;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use crate::handlers::error::{build_error_response, detect_language};

/// Authenticated caller, taken from the access token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub role: UserRole,
    /// Company bound to the user when the token was issued
    pub company_id: Option<Uuid>,
    pub jti: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.user_id().ok()?;
        let company_id = claims.company_id();
        Some(Self {
            user_id,
            role: claims.role,
            company_id,
            jti: claims.jti,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Ok(reject(req, error_codes::MISSING_CREDENTIALS, "missing_auth_token")),
            };

            let codec = match req.app_data::<web::Data<JwtCodec>>() {
                Some(codec) => codec.clone(),
                None => {
                    log::error!("JwtCodec is not registered as app data");
                    return Ok(reject(req, error_codes::TOKEN_INVALID, "token_invalid"));
                }
            };

            let auth_context = match codec.decode(&token).ok().and_then(AuthContext::from_claims) {
                Some(context) => context,
                None => return Ok(reject(req, error_codes::TOKEN_INVALID, "token_invalid")),
            };

            req.extensions_mut().insert(auth_context);
            service.call(req).await.map(ServiceResponse::map_into_boxed_body)
        })
    }
}

fn unauthorized(req: &HttpRequest, code: &str, key: &str) -> actix_web::HttpResponse {
    log::debug!("Rejected unauthenticated request to {}", req.path());
    build_error_response(StatusCode::UNAUTHORIZED, code, key, &[], detect_language(req))
}

fn reject(req: ServiceRequest, code: &str, key: &str) -> ServiceResponse<BoxBody> {
    let response = unauthorized(req.request(), code, key);
    req.into_response(response)
}

fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                let response = unauthorized(req, error_codes::UNAUTHORIZED, "unauthorized");
                InternalError::from_response("authentication required", response).into()
            });

        ready(result)
    }
}
