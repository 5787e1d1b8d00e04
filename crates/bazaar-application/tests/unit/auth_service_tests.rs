//! Unit tests for login, logout and account flows

use std::sync::atomic::Ordering;

use bazaar_application::{PasswordChange, RegisterRequest, sanitize_redirect};
use bazaar_domain::constants::{FORGOT_PASSWORD_MESSAGE, PASSWORD_UPDATED_MESSAGE};
use bazaar_domain::{AuthError, Role, SessionCache, TokenCodec};

use crate::support::{Harness, PlainTokens};

fn change(password: &str, confirm: &str) -> PasswordChange {
    PasswordChange {
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[tokio::test]
async fn test_login_success_issues_verifiable_token() {
    let h = Harness::new();
    let id = h.users.insert("ana@example.com", Some("secret"), Some(Role::Admin), true);

    let ok = h
        .auth
        .login("ana@example.com", "secret", Some("/admin/users"))
        .await
        .expect("login");

    assert_eq!(ok.user.id, id);
    assert_eq!(ok.redirect_to, "/admin/users");
    let claims = PlainTokens.verify(&ok.token).expect("token verifies");
    assert_eq!(claims.user_id, id);
    assert_eq!(claims.role, Role::Admin);
}

#[tokio::test]
async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
    let h = Harness::new();
    h.users.insert("ana@example.com", Some("secret"), Some(Role::Customer), true);

    let unknown = h.auth.login("nobody@example.com", "secret", None).await;
    let wrong = h.auth.login("ana@example.com", "nope", None).await;

    let unknown = unknown.expect_err("unknown email fails");
    let wrong = wrong.expect_err("wrong password fails");
    assert_eq!(unknown, wrong);
    assert_eq!(unknown.to_string(), "Invalid email or password");
}

#[tokio::test]
async fn test_deactivated_account_has_distinct_message() {
    let h = Harness::new();
    h.users.insert("old@example.com", Some("secret"), Some(Role::Customer), false);

    let err = h
        .auth
        .login("old@example.com", "secret", None)
        .await
        .expect_err("deactivated");
    assert_eq!(err, AuthError::AccountDeactivated);
    assert_eq!(err.to_string(), "Account is deactivated. Please contact support.");
}

#[tokio::test]
async fn test_login_without_hash_is_invalid_credentials() {
    let h = Harness::new();
    h.users.insert("sso@example.com", None, Some(Role::Customer), true);

    let err = h.auth.login("sso@example.com", "", None).await.expect_err("no hash");
    assert_eq!(err, AuthError::InvalidCredentials);
}

#[tokio::test]
async fn test_login_store_fault() {
    let h = Harness::new();
    h.users.failing.store(true, Ordering::SeqCst);

    let err = h.auth.login("ana@example.com", "x", None).await.expect_err("fault");
    assert_eq!(err.to_string(), "Login failed. Please try again.");
}

#[test]
fn test_redirect_is_kept_local() {
    assert_eq!(sanitize_redirect(None), "/");
    assert_eq!(sanitize_redirect(Some("/orders")), "/orders");
    assert_eq!(sanitize_redirect(Some("https://evil.test")), "/");
    assert_eq!(sanitize_redirect(Some("//evil.test/x")), "/");
    assert_eq!(sanitize_redirect(Some("")), "/");
}

#[tokio::test]
async fn test_logout_with_bad_token_skips_invalidation() {
    let h = Harness::new();
    let id = h.users.insert("ana@example.com", Some("pw"), Some(Role::Customer), true);
    let token = PlainTokens.issue(id, "ana@example.com", Role::Customer).expect("issue");
    h.resolver.resolve(Some(&token)).await.expect("resolve");

    assert_eq!(h.auth.logout(Some("tampered")), None);
    assert_eq!(h.auth.logout(None), None);
    assert_eq!(h.cache.len(), 1);
}

#[tokio::test]
async fn test_register_creates_customer_and_sends_welcome() {
    let h = Harness::new();

    let user = h
        .auth
        .register(RegisterRequest {
            first_name: "Cy".to_string(),
            last_name: "Ng".to_string(),
            email: "cy@example.com".to_string(),
            password: "pw123456".to_string(),
            confirm_password: "pw123456".to_string(),
        })
        .await
        .expect("register");

    assert_eq!(user.role, Role::Customer);
    assert!(user.is_active);
    assert_eq!(h.users.hash_of(user.id).as_deref(), Some("hashed:pw123456"));

    let sent = h.sender.settle().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "cy@example.com");
    assert!(sent[0].html.contains("Hi Cy"));
}

#[tokio::test]
async fn test_register_rejects_mismatch_and_duplicates() {
    let h = Harness::new();
    h.users.insert("cy@example.com", Some("pw"), Some(Role::Customer), true);

    let request = |email: &str, confirm: &str| RegisterRequest {
        first_name: String::new(),
        last_name: String::new(),
        email: email.to_string(),
        password: "pw123456".to_string(),
        confirm_password: confirm.to_string(),
    };

    let mismatch = h.auth.register(request("new@example.com", "other")).await;
    assert_eq!(mismatch.expect_err("mismatch"), AuthError::PasswordMismatch);

    let taken = h.auth.register(request("cy@example.com", "pw123456")).await;
    assert_eq!(taken.expect_err("duplicate"), AuthError::EmailTaken);
}

#[tokio::test]
async fn test_forgot_password_answer_is_uniform() {
    let h = Harness::new();
    h.users.insert("ana@example.com", Some("pw"), Some(Role::Customer), true);

    let known = h.auth.forgot_password("ana@example.com").await.expect("known");
    let unknown = h.auth.forgot_password("nobody@example.com").await.expect("unknown");
    assert_eq!(known, FORGOT_PASSWORD_MESSAGE);
    assert_eq!(known, unknown);

    let sent = h.sender.settle().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].html.contains("https://bazaar.test/reset-password?token=reset:1:ana@example.com"));
}

#[tokio::test]
async fn test_email_failure_does_not_fail_the_flow() {
    let h = Harness::new();
    h.users.insert("ana@example.com", Some("pw"), Some(Role::Customer), true);
    h.sender.failing.store(true, Ordering::SeqCst);

    let answer = h.auth.forgot_password("ana@example.com").await;
    assert_eq!(answer, Ok(FORGOT_PASSWORD_MESSAGE));
    assert!(h.sender.settle().await.is_empty());
}

#[tokio::test]
async fn test_reset_password_updates_hash_and_cache() {
    let h = Harness::new();
    let id = h.users.insert("ana@example.com", Some("old"), Some(Role::Customer), true);
    let session = PlainTokens.issue(id, "ana@example.com", Role::Customer).expect("issue");
    h.resolver.resolve(Some(&session)).await.expect("cached");

    let reset = PlainTokens.issue_reset(id, "ana@example.com").expect("reset");
    let done = h.auth.reset_password(&reset, change("new-pass", "new-pass")).await;

    assert_eq!(done, Ok(PASSWORD_UPDATED_MESSAGE));
    assert_eq!(h.users.hash_of(id).as_deref(), Some("hashed:new-pass"));
    assert!(h.cache.get(id).is_none());
}

#[tokio::test]
async fn test_reset_password_rejects_session_token() {
    let h = Harness::new();
    let id = h.users.insert("ana@example.com", Some("old"), Some(Role::Customer), true);
    let session = PlainTokens.issue(id, "ana@example.com", Role::Customer).expect("issue");

    let err = h
        .auth
        .reset_password(&session, change("new-pass", "new-pass"))
        .await
        .expect_err("session token is not a reset token");
    assert_eq!(err, AuthError::InvalidResetToken);
    assert_eq!(h.users.hash_of(id).as_deref(), Some("hashed:old"));
}

#[tokio::test]
async fn test_update_password_requires_session() {
    let h = Harness::new();
    let id = h.users.insert("ana@example.com", Some("old"), Some(Role::Customer), true);
    let session = PlainTokens.issue(id, "ana@example.com", Role::Customer).expect("issue");

    let missing = h.auth.update_password(None, change("a1", "a1")).await;
    assert_eq!(missing, Err(AuthError::NotAuthenticated));

    let invalid = h.auth.update_password(Some("junk"), change("a1", "a1")).await;
    assert_eq!(invalid, Err(AuthError::InvalidToken));

    let mismatch = h.auth.update_password(Some(&session), change("a1", "a2")).await;
    assert_eq!(mismatch, Err(AuthError::PasswordMismatch));

    let ok = h.auth.update_password(Some(&session), change("a1", "a1")).await;
    assert_eq!(ok, Ok(PASSWORD_UPDATED_MESSAGE));
    assert_eq!(h.users.hash_of(id).as_deref(), Some("hashed:a1"));
}
