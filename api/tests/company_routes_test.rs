//! Company directory and user binding endpoints

mod common;

use actix_web::{http::StatusCode, test};
use common::{bearer, setup, EXEL_SOLAR_ID, SUNPOWER_ID, SUNPOWER_OWNER_ID, TESLA_ENERGY_ID};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_health_check() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_company_list_is_paginated() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::get().uri("/api/v1/company?start=0&pageSize=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["rows"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["pageSize"], 2);
}

#[actix_web::test]
async fn test_companies_filtered_by_status() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/company/approved").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["companyId"], SUNPOWER_ID);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/company/pending").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["rows"][0]["companyId"], TESLA_ENERGY_ID);
    assert_eq!(body["rows"][0]["name"], "TESLA ENERGY");
}

#[actix_web::test]
async fn test_company_profile_scores() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let uri = format!("/api/v1/company/{}", SUNPOWER_ID);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["score"], 5.0);
    assert_eq!(body["oneComment"], "This is a comment");
    assert_eq!(body["name"], "SUNPOWER");

    let uri = format!("/api/v1/company/{}", EXEL_SOLAR_ID);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["score"].is_null());
    assert!(body["oneComment"].is_null());
}

#[actix_web::test]
async fn test_unknown_company_is_not_found() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let uri = format!("/api/v1/company/{}", uuid::Uuid::new_v4());
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_malformed_company_id_is_bad_request() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/company/not-a-uuid").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_company_requires_token() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/company/create")
        .set_json(json!({ "name": "Solaris" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_CREDENTIALS");
}

#[actix_web::test]
async fn test_create_company_validates_and_creates_pending() {
    let ctx = setup().await;
    let auth = ctx.login("installer").await;
    let app = test::init_service(ctx.app()).await;

    let mut company = json!({
        "name": "Solaris MX",
        "description": "Paneles solares residenciales",
        "email": "ventas@solaris.mx",
        "phone": "4421234567",
        "webPage": "https://solaris.mx",
        "street": "Av. Universidad",
        "streetNumber": "100",
        "city": "Querétaro",
        "state": "QRO",
        "zipCode": "76000"
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/company/create")
        .insert_header(bearer(&auth))
        .set_json(&company)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "pending_approval");
    assert!(body["userId"].is_null());

    company["email"] = json!("not-an-email");
    let req = test::TestRequest::post()
        .uri("/api/v1/company/create")
        .insert_header(bearer(&auth))
        .set_json(&company)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["email"].is_array());
}

#[actix_web::test]
async fn test_approval_sends_one_notification() {
    let ctx = setup().await;
    let auth = ctx.login("admin").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/company/pending/{}", TESLA_ENERGY_ID))
        .insert_header(bearer(&auth))
        .set_json(json!({ "status": "approved" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "approved");

    let sent = ctx.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].company_id.to_string(), TESLA_ENERGY_ID);
    assert_eq!(sent[0].target_arn, common::TEST_TARGET_ARN);
}

#[actix_web::test]
async fn test_edit_without_status_change_sends_nothing() {
    let ctx = setup().await;
    let auth = ctx.login("admin").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/company/pending/{}", EXEL_SOLAR_ID))
        .insert_header(bearer(&auth))
        .set_json(json!({ "description": "Instalación y mantenimiento" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(ctx.notifier.sent().is_empty());
}

#[actix_web::test]
async fn test_assign_then_conflict() {
    let ctx = setup().await;
    let auth = ctx.login("owner").await;
    let user_id = auth.user.user_id;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/company/{}/assign", EXEL_SOLAR_ID))
        .insert_header(bearer(&auth))
        .set_json(json!({ "userId": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "success");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/user/{}", user_id)).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["companyId"], EXEL_SOLAR_ID);

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/company/{}/assign", TESLA_ENERGY_ID))
        .insert_header(bearer(&auth))
        .set_json(json!({ "userId": user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "USER_ALREADY_ASSIGNED");
    assert_eq!(body["message"], "El usuario ya tiene una compañía asignada");
}

#[actix_web::test]
async fn test_assign_to_owned_company_conflicts() {
    let ctx = setup().await;
    let auth = ctx.login("newcomer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/company/{}/assign", SUNPOWER_ID))
        .insert_header(bearer(&auth))
        .insert_header(("Accept-Language", "en-US,en;q=0.9"))
        .set_json(json!({ "userId": auth.user.user_id }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "COMPANY_ALREADY_ASSIGNED");
}

#[actix_web::test]
async fn test_assign_unknown_user() {
    let ctx = setup().await;
    let auth = ctx.login("operator").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/company/{}/assign", EXEL_SOLAR_ID))
        .insert_header(bearer(&auth))
        .set_json(json!({ "userId": uuid::Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "El usuario no existe");
}

#[actix_web::test]
async fn test_unbind_clears_both_sides() {
    let ctx = setup().await;
    let auth = ctx.login("operator").await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/user/{}/company", SUNPOWER_OWNER_ID))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["companyId"], SUNPOWER_ID);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/user/{}/company", SUNPOWER_OWNER_ID))
        .insert_header(bearer(&auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["companyId"], SUNPOWER_ID);
    assert!(body["userId"].is_null());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/user/{}", SUNPOWER_OWNER_ID)).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body["companyId"].is_null());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/api/v1/company/{}", SUNPOWER_ID)).to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body["userId"].is_null());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/user/{}/company", SUNPOWER_OWNER_ID))
        .insert_header(bearer(&auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_products_and_files() {
    let ctx = setup().await;
    let auth = ctx.login("operator").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/company/upload/file")
        .insert_header(bearer(&auth))
        .set_json(json!({
            "companyId": SUNPOWER_ID,
            "fileUrl": "https://cdn.greencircle.mx/files/cert.pdf",
            "fileDescription": "Certificado",
            "fileFormat": "pdf"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/company/files?companyId={}", SUNPOWER_ID))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::post()
        .uri("/api/v1/company/upload/image")
        .insert_header(bearer(&auth))
        .set_json(json!({
            "companyId": SUNPOWER_ID,
            "imageUrl": "https://cdn.greencircle.mx/img/sunpower.png"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["profilePicture"], "https://cdn.greencircle.mx/img/sunpower.png");
}

#[actix_web::test]
async fn test_unbind_user_without_company_is_not_found() {
    let ctx = setup().await;
    let auth = ctx.login("operator").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/user/{}/company", auth.user.user_id))
        .insert_header(bearer(&auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/user/{}", auth.user.user_id))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["updatedAt"], serde_json::to_value(auth.user.updated_at).unwrap());
}
