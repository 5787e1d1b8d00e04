//! Page handlers behind the guard

use bazaar_domain::{Role, UserUpdate};
use rocket::http::{Cookie, Status};
use serde_json::Value;

use crate::support::{ADMIN, COOKIE, CUSTOMER, TestApp, location, removes_cookie, tamper};

#[rocket::async_test]
async fn test_session_page_needs_cookie() {
    let app = TestApp::spawn().await;
    let response = app.get_with("/booking", None).await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response), Some("/login?redirect=%2Fbooking"));
}

#[rocket::async_test]
async fn test_session_page_with_valid_cookie() {
    let app = TestApp::spawn().await;
    let token = app.token_for(CUSTOMER);
    let response = app.get_with("/profile", Some(&token)).await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("body");
    assert!(body.contains("customer@example.com"));
}

#[rocket::async_test]
async fn test_session_page_with_forged_cookie_goes_to_login() {
    let app = TestApp::spawn().await;
    let token = tamper(&app.token_for(CUSTOMER));
    let response = app.get_with("/orders", Some(&token)).await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response), Some("/login?redirect=%2Forders"));
}

#[rocket::async_test]
async fn test_admin_page_rechecks_current_role() {
    let app = TestApp::spawn().await;
    let token = app.token_for(ADMIN);
    app.context
        .users()
        .update_user(
            ADMIN,
            &UserUpdate {
                role: Some(Role::Customer),
                is_active: None,
            },
        )
        .await
        .expect("update");

    let response = app.get_with("/admin/reports", Some(&token)).await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response), Some("/"));
}

#[rocket::async_test]
async fn test_page_logout_clears_cookie_and_redirects() {
    let app = TestApp::spawn().await;
    let token = app.token_for(CUSTOMER);
    let response = app
        .client
        .get("/logout")
        .cookie(Cookie::new(COOKIE, token))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(location(&response), Some("/login"));
    assert!(removes_cookie(&response));
}

#[rocket::async_test]
async fn test_login_page_escapes_redirect() {
    let app = TestApp::spawn().await;
    let response = app.get_with("/login?redirect=%22%3E%3Cscript%3E", None).await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.expect("body");
    assert!(!body.contains("<script>"));
}

#[rocket::async_test]
async fn test_health() {
    let app = TestApp::spawn().await;
    let response = app.get_with("/health", None).await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_json::<Value>().await.expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["environment"], "development");
}
