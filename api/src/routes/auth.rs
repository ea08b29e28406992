//! Session endpoints (`/api/v1/auth`)
//!
//! All three answer with the same `{tokens, user}` body.
//! Bodies are optional so a missing token is reported by the service with
//! its own message rather than as a malformed payload.

use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};

use crate::app::AppState;
use crate::backend::Backend;
use crate::dto::{GoogleLoginRequest, RefreshTokenRequest, UpdateUserTokensRequest};
use crate::handlers::handle_domain_error;

pub fn configure<B: Backend>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/login/google", web::post().to(google_login::<B>))
            .route("/refresh", web::post().to(refresh_tokens::<B>))
            .route("/update-user-tokens", web::post().to(update_user_tokens::<B>)),
    );
}

/// Handler for POST /api/v1/auth/login/google
pub async fn google_login<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: Option<web::Json<GoogleLoginRequest>>,
) -> HttpResponse {
    let google_token = body
        .and_then(|body| body.into_inner().google_token)
        .unwrap_or_default();

    match state.auth_service.google_login(&google_token).await {
        Ok(response) => {
            log::info!("User {} signed in with Google", response.user.user_id);
            HttpResponse::Ok().json(response)
        }
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/auth/refresh
pub async fn refresh_tokens<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> HttpResponse {
    let refresh_token = body
        .and_then(|body| body.into_inner().refresh_token)
        .unwrap_or_default();

    match state.auth_service.update_tokens(&refresh_token).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error, &req),
    }
}

/// Handler for POST /api/v1/auth/update-user-tokens
///
/// The access token comes from `authToken` in the body, or from the
/// `Authorization` header when the body has none.
pub async fn update_user_tokens<B: Backend>(
    req: HttpRequest,
    state: web::Data<AppState<B>>,
    body: Option<web::Json<UpdateUserTokensRequest>>,
) -> HttpResponse {
    let auth_token = body
        .and_then(|body| body.into_inner().auth_token)
        .filter(|token| !token.trim().is_empty())
        .or_else(|| header_token(&req))
        .unwrap_or_default();

    match state.auth_service.update_user_tokens_data(&auth_token).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(error, &req),
    }
}

fn header_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_string)
}
