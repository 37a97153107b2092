//! Integration tests for the account endpoints

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{TestContext, PASSWORD};
use pd_core::domain::entities::user::Role;
use pd_core::repositories::UserRepository;

async fn register_and_verify(ctx: &TestContext, email: &str) -> Value {
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": email, "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = ctx.email.last_sent_to(email).expect("verification email");
    let token = sent.token().expect("token in link").to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/auth/verify-email?token={}", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_register_sends_link_and_creates_nothing() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "new@example.com", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "Verification email sent");
    assert!(ctx.users.all().await.is_empty());

    let sent = ctx.email.last_sent_to("new@example.com").unwrap();
    assert!(sent.link.starts_with("http://front.test/verify-email?token="));
}

#[actix_web::test]
async fn test_register_duplicate_email_conflicts() {
    let ctx = TestContext::new();
    ctx.seed_user("taken@example.com", Role::Customer).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "taken@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "CONFLICT");
}

#[actix_web::test]
async fn test_register_rejects_invalid_email() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "not-an-email", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["details"]["email"].is_array());
}

#[actix_web::test]
async fn test_register_succeeds_when_email_delivery_fails() {
    let ctx = TestContext::new();
    ctx.email.set_simulate_failure(true);
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "offline@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_verify_email_creates_first_user_as_admin() {
    let ctx = TestContext::new();

    let body = register_and_verify(&ctx, "first@example.com").await;

    assert_eq!(body["user"]["email"], "first@example.com");
    assert_eq!(body["user"]["role"], "admin");

    let second = register_and_verify(&ctx, "second@example.com").await;
    assert_eq!(second["user"]["role"], "customer");
}

#[actix_web::test]
async fn test_verify_email_is_idempotent() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": "a@b.com", "password": PASSWORD }))
        .to_request();
    test::call_service(&app, req).await;
    let token = ctx
        .email
        .last_sent_to("a@b.com")
        .and_then(|m| m.token().map(str::to_string))
        .unwrap();

    for expected in ["Email verified successfully", "User already registered"] {
        let req = test::TestRequest::post()
            .uri(&format!("/auth/verify-email?token={}", token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], expected);
    }

    assert_eq!(ctx.users.count().await.unwrap(), 1);
}

#[actix_web::test]
async fn test_verify_email_rejects_bad_token() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/verify-email?token=not.a.jwt")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_returns_bearer_token_for_user() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("login@example.com", Role::Customer).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "login@example.com", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["token_type"], "bearer");
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(ctx.tokens.verify_access_token(token).unwrap(), user.id);
}

#[actix_web::test]
async fn test_login_wrong_password_is_unauthorized() {
    let ctx = TestContext::new();
    ctx.seed_user("login@example.com", Role::Customer).await;
    let app = init_app!(ctx);

    for email in ["login@example.com", "nobody@example.com"] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "email": email, "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_token_endpoint_accepts_form() {
    let ctx = TestContext::new();
    ctx.seed_user("form@example.com", Role::Employee).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/token")
        .set_form([("username", "form@example.com"), ("password", PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["access_token"].is_string());
}

#[actix_web::test]
async fn test_me_returns_profile() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("me@example.com", Role::Employee).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", ctx.bearer(&user)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({ "id": user.id, "email": "me@example.com", "role": "employee" })
    );
}

#[actix_web::test]
async fn test_me_rejects_missing_invalid_and_orphaned_tokens() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let orphan = ctx.bearer_for_id(999);

    let headers = [None, Some("Bearer invalid-token".to_string()), Some(orphan)];
    for header in headers {
        let mut req = test::TestRequest::get().uri("/auth/me");
        if let Some(value) = header {
            req = req.insert_header(("Authorization", value));
        }
        let resp = test::call_service(&app, req.to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Could not validate credentials");
    }
}

#[actix_web::test]
async fn test_me_rejects_registration_token_as_bearer() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);
    let token = ctx
        .tokens
        .issue_registration_token("x@example.com", "hash", Role::Customer)
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_create_user_bootstrap_then_admin_only() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    // No users yet: anyone may create the first account, which becomes admin
    let req = test::TestRequest::post()
        .uri("/auth/create-user")
        .set_json(json!({ "email": "boss@example.com", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "admin");

    let req = test::TestRequest::post()
        .uri("/auth/create-user")
        .set_json(json!({ "email": "anon@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let customer = ctx.seed_user("cust@example.com", Role::Customer).await;
    let req = test::TestRequest::post()
        .uri("/auth/create-user")
        .insert_header(("Authorization", ctx.bearer(&customer)))
        .set_json(json!({ "email": "staff@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let admin = ctx.users.find_by_email("boss@example.com").await.unwrap().unwrap();
    let req = test::TestRequest::post()
        .uri("/auth/create-user")
        .insert_header(("Authorization", ctx.bearer(&admin)))
        .set_json(json!({ "email": "staff@example.com", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "employee");
}

#[actix_web::test]
async fn test_create_user_with_invalid_token_is_anonymous() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/create-user")
        .insert_header(("Authorization", "Bearer garbage"))
        .set_json(json!({ "email": "first@example.com", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_change_password() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("pw@example.com", Role::Customer).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/change-password")
        .insert_header(("Authorization", ctx.bearer(&user)))
        .set_json(json!({ "old_password": "wrong", "new_password": "next" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/auth/change-password")
        .insert_header(("Authorization", ctx.bearer(&user)))
        .set_json(json!({ "old_password": PASSWORD, "new_password": "next" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "pw@example.com", "password": "next" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_change_password_requires_auth() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/change-password")
        .set_json(json!({ "old_password": "a", "new_password": "b" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_forgot_and_reset_password() {
    let ctx = TestContext::new();
    ctx.seed_user("reset@example.com", Role::Customer).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/forgot-password")
        .set_json(json!({ "email": "unknown@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/auth/forgot-password")
        .set_json(json!({ "email": "reset@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = ctx.email.last_sent_to("reset@example.com").unwrap();
    assert!(sent.link.starts_with("http://front.test/reset-password?token="));
    let token = sent.token().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/auth/reset-password")
        .set_json(json!({ "token": token, "new_password": "fresh" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "reset@example.com", "password": "fresh" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_reset_password_rejects_other_token_purposes() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("reset@example.com", Role::Customer).await;
    let app = init_app!(ctx);
    let access = ctx.tokens.issue_access_token(user.id).unwrap();

    let req = test::TestRequest::post()
        .uri("/auth/reset-password")
        .set_json(json!({ "token": access, "new_password": "fresh" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_validation_error() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
