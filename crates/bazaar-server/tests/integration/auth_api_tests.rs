//! Authentication API over HTTP

use bazaar_domain::Role;
use bazaar_infrastructure::config::JwtConfig;
use bazaar_infrastructure::constants::SESSION_AUDIENCE;
use bazaar_infrastructure::crypto::JwtTokenCodec;
use rocket::http::{ContentType, Cookie, Status};
use serde_json::{Value, json};

use crate::support::{
    COOKIE, CUSTOMER, INACTIVE, PASSWORD, SECRET, TestApp, email_of, issued_cookie,
    removes_cookie,
};

async fn login(
    app: &TestApp,
    email: &str,
    password: &str,
) -> (Status, Value, Option<String>, Vec<String>) {
    let response = app
        .post_json(
            "/api/auth/login",
            json!({ "email": email, "password": password, "redirect": "/orders" }),
        )
        .await;
    let status = response.status();
    let cookie = issued_cookie(&response);
    let headers = response
        .headers()
        .get("Set-Cookie")
        .map(str::to_string)
        .collect();
    let body = response.into_json::<Value>().await.expect("json body");
    (status, body, cookie, headers)
}

#[rocket::async_test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::spawn().await;
    let (status, body, cookie, headers) = login(&app, &email_of(CUSTOMER), PASSWORD).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], email_of(CUSTOMER));
    assert_eq!(body["redirectTo"], "/orders");

    let token = cookie.expect("cookie set");
    assert_eq!(app.context.tokens().verify(&token).map(|c| c.user_id), Some(CUSTOMER));

    let header = headers
        .iter()
        .find(|h| h.starts_with(&format!("{COOKIE}=")))
        .expect("set-cookie header");
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("SameSite=Lax"));
    assert!(header.contains("Path=/"));
    assert!(header.contains("Max-Age=604800"));
    assert!(!header.contains("Secure"));
}

#[rocket::async_test]
async fn test_login_failures_do_not_reveal_which_part_was_wrong() {
    let app = TestApp::spawn().await;
    let (unknown_status, unknown, cookie, _) = login(&app, "nobody@example.com", PASSWORD).await;
    let (wrong_status, wrong, _, _) = login(&app, &email_of(CUSTOMER), "wrong password").await;

    assert_eq!(unknown_status, Status::Unauthorized);
    assert_eq!(wrong_status, Status::Unauthorized);
    assert_eq!(unknown["error"], "Invalid email or password");
    assert_eq!(unknown, wrong);
    assert!(cookie.is_none());
}

#[rocket::async_test]
async fn test_login_reports_deactivated_account() {
    let app = TestApp::spawn().await;
    let (status, body, cookie, _) = login(&app, &email_of(INACTIVE), PASSWORD).await;

    assert_eq!(status, Status::Forbidden);
    assert_eq!(body["error"], "Account is deactivated. Please contact support.");
    assert!(cookie.is_none());
}

#[rocket::async_test]
async fn test_login_drops_foreign_redirect() {
    let app = TestApp::spawn().await;
    let response = app
        .post_json(
            "/api/auth/login?redirect=%2Fbooking",
            json!({ "email": email_of(CUSTOMER), "password": PASSWORD, "redirect": "//evil.example" }),
        )
        .await;
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["redirectTo"], "/");
}

#[rocket::async_test]
async fn test_logout_deletes_cookie_for_malformed_token() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post("/api/auth/logout")
        .cookie(Cookie::new(COOKIE, "definitely.not.a-token"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(removes_cookie(&response));
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["message"], "Logged out successfully");
}

#[rocket::async_test]
async fn test_logout_deletes_cookie_for_expired_token() {
    let app = TestApp::spawn().await;
    let codec = JwtTokenCodec::new(&JwtConfig {
        secret: SECRET.to_string(),
        ..JwtConfig::default()
    })
    .expect("codec");
    let claims = codec.claims_for(
        CUSTOMER,
        &email_of(CUSTOMER),
        Some(Role::Customer),
        SESSION_AUDIENCE,
        -60,
    );
    let expired = codec.encode_claims(&claims).expect("encode");
    assert!(app.context.tokens().verify(&expired).is_none());

    let response = app
        .client
        .post("/api/auth/logout")
        .cookie(Cookie::new(COOKIE, expired))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(removes_cookie(&response));
}

#[rocket::async_test]
async fn test_logout_without_cookie() {
    let app = TestApp::spawn().await;
    let response = app.client.post("/api/auth/logout").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logged out successfully (no token found)");
}

#[rocket::async_test]
async fn test_session_lifecycle_over_http() {
    let app = TestApp::spawn().await;
    let (status, _, _, _) = login(&app, &email_of(CUSTOMER), PASSWORD).await;
    assert_eq!(status, Status::Ok);

    for _ in 0..2 {
        let response = app.client.get("/api/auth/session").dispatch().await;
        let body = response.into_json::<Value>().await.expect("json body");
        assert_eq!(body["user"]["id"], CUSTOMER);
    }
    assert_eq!(app.context.cache().len(), 1);

    let response = app.client.post("/api/auth/logout").dispatch().await;
    assert!(removes_cookie(&response));
    assert!(app.context.cache().is_empty());

    let response = app.client.get("/api/auth/session").dispatch().await;
    let body = response.into_json::<Value>().await.expect("json body");
    assert!(body["user"].is_null());
}

#[rocket::async_test]
async fn test_register_creates_customer_and_sends_welcome() {
    let app = TestApp::spawn().await;
    let request = json!({
        "firstName": "Nia",
        "lastName": "Okafor",
        "email": "nia@example.com",
        "password": "s3cret-pass",
        "confirmPassword": "s3cret-pass",
    });
    let response = app.post_json("/api/auth/register", request.clone()).await;

    assert_eq!(response.status(), Status::Created);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["user"]["role"], "customer");

    let sent = app.sender.settle().await;
    assert!(sent.iter().any(|m| m.to == "nia@example.com" && m.subject.starts_with("Welcome")));

    let response = app.post_json("/api/auth/register", request).await;
    assert_eq!(response.status(), Status::Conflict);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["error"], "User with this email already exists");
}

#[rocket::async_test]
async fn test_register_rejects_mismatched_passwords() {
    let app = TestApp::spawn().await;
    let response = app
        .post_json(
            "/api/auth/register",
            json!({
                "email": "nia@example.com",
                "password": "one",
                "confirmPassword": "two",
            }),
        )
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["error"], "Passwords do not match");
}

#[rocket::async_test]
async fn test_forgot_password_answers_uniformly() {
    let app = TestApp::spawn().await;
    let known = app
        .post_json("/api/auth/forgot-password", json!({ "email": email_of(CUSTOMER) }))
        .await
        .into_json::<Value>()
        .await
        .expect("json body");
    let unknown = app
        .post_json("/api/auth/forgot-password", json!({ "email": "nobody@example.com" }))
        .await
        .into_json::<Value>()
        .await
        .expect("json body");

    assert_eq!(known, unknown);
    let sent = app.sender.settle().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("/reset-password?token="));
}

#[rocket::async_test]
async fn test_reset_password_then_login_with_new_password() {
    let app = TestApp::spawn().await;
    let token = app
        .context
        .tokens()
        .issue_reset(CUSTOMER, &email_of(CUSTOMER))
        .expect("issue");

    let response = app
        .post_json(
            "/api/auth/reset-password",
            json!({ "token": token, "password": "brand-new", "confirmPassword": "brand-new" }),
        )
        .await;
    assert_eq!(response.status(), Status::Ok);

    let (status, _, _, _) = login(&app, &email_of(CUSTOMER), "brand-new").await;
    assert_eq!(status, Status::Ok);
    let (status, _, _, _) = login(&app, &email_of(CUSTOMER), PASSWORD).await;
    assert_eq!(status, Status::Unauthorized);
}

#[rocket::async_test]
async fn test_reset_password_rejects_session_token() {
    let app = TestApp::spawn().await;
    let session = app.token_for(CUSTOMER);
    let path = format!("/api/auth/reset-password?token={session}");
    let response = app
        .post_json(
            &path,
            json!({ "password": "brand-new", "confirmPassword": "brand-new" }),
        )
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["error"], "Invalid or expired reset token");
}

#[rocket::async_test]
async fn test_update_password_requires_session() {
    let app = TestApp::spawn().await;
    let change = json!({ "password": "brand-new", "confirmPassword": "brand-new" });

    let response = app.post_json("/api/auth/password", change.clone()).await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["error"], "Not authenticated");

    let token = app.token_for(CUSTOMER);
    let response = app
        .client
        .post("/api/auth/password")
        .header(ContentType::JSON)
        .cookie(Cookie::new(COOKIE, token))
        .body(change.to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["message"], "Password updated successfully");
}
