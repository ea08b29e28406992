//! Complaint and review endpoints

mod common;

use actix_web::{http::StatusCode, test};
use common::{bearer, setup, EXEL_SOLAR_ID, SUNPOWER_ID};
use serde_json::{json, Value};

fn complaint_body(company_id: &str) -> Value {
    json!({
        "companyId": company_id,
        "complaintSubject": "Mal Servicio",
        "complaintDescription": "La instalación quedó incompleta"
    })
}

#[actix_web::test]
async fn test_complaint_lifecycle() {
    let ctx = setup().await;
    let auth = ctx.login("customer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/complaints/create")
        .insert_header(bearer(&auth))
        .set_json(complaint_body(SUNPOWER_ID))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["complaintStatus"], "open");
    assert_eq!(created["userId"], auth.user.user_id.to_string());
    let complaint_id = created["complaintId"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/complaints?start=0&pageSize=10").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/complaints/user/{}", auth.user.user_id))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/complaints/company/{}", EXEL_SOLAR_ID))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/complaints/{}/inactive", complaint_id))
        .insert_header(bearer(&auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["complaintStatus"], "inactive");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/complaints/{}", complaint_id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["rows"][0]["complaintStatus"], "inactive");
}

#[actix_web::test]
async fn test_unknown_complaint_lookup_is_empty_page() {
    let ctx = setup().await;
    let app = test::init_service(ctx.app()).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/complaints/{}", uuid::Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 0);
}

#[actix_web::test]
async fn test_flag_unknown_complaint_is_not_found() {
    let ctx = setup().await;
    let auth = ctx.login("customer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/complaints/{}/invalid", uuid::Uuid::new_v4()))
        .insert_header(bearer(&auth))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "COMPLAINT_NOT_FOUND");
}

#[actix_web::test]
async fn test_complaint_against_unknown_company() {
    let ctx = setup().await;
    let auth = ctx.login("customer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/complaints/create")
        .insert_header(bearer(&auth))
        .set_json(complaint_body(&uuid::Uuid::new_v4().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_complaint_subject_is_rejected() {
    let ctx = setup().await;
    let auth = ctx.login("customer").await;
    let app = test::init_service(ctx.app()).await;

    let mut body = complaint_body(SUNPOWER_ID);
    body["complaintSubject"] = json!("Otro");
    let req = test::TestRequest::post()
        .uri("/api/v1/complaints/create")
        .insert_header(bearer(&auth))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_review_updates_company_score() {
    let ctx = setup().await;
    let auth = ctx.login("reviewer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews/create")
        .insert_header(bearer(&auth))
        .set_json(json!({ "companyId": EXEL_SOLAR_ID, "rating": 4, "comment": "Buen servicio" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/reviews/company/{}", EXEL_SOLAR_ID))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/company/{}", EXEL_SOLAR_ID))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["score"], 4.0);
    assert_eq!(body["oneComment"], "Buen servicio");
}

#[actix_web::test]
async fn test_review_rating_out_of_range() {
    let ctx = setup().await;
    let auth = ctx.login("reviewer").await;
    let app = test::init_service(ctx.app()).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/reviews/create")
        .insert_header(bearer(&auth))
        .set_json(json!({ "companyId": SUNPOWER_ID, "rating": 6 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["rating"].is_array());
}
