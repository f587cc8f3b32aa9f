use crate::helpers::{TestApp, location, session_cookie};

#[tokio::test]
async fn lucky_login_redirects_to_the_admin_page() {
    let app = TestApp::spawn(2).await;

    let response = app.post_login("alice", "wonderland", true).await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/admin"));

    let admin = app.get("/admin").await;
    assert_eq!(admin.status().as_u16(), 200);
    assert!(admin.text().await.unwrap().contains("Welcome, alice!"));
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::spawn(2).await;

    let response = app.post_login("alice", "looking-glass", true).await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/login"));
    let wrong_password_page = app.login_page().await;

    let response = app.post_login("mallory", "wonderland", true).await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/login"));
    let unknown_user_page = app.login_page().await;

    assert!(wrong_password_page.contains("Invalid credentials."));
    assert!(unknown_user_page.contains("Invalid credentials."));
    assert!(wrong_password_page.contains(r#"value="alice""#));
    assert!(unknown_user_page.contains(r#"value="mallory""#));
}

#[tokio::test]
async fn missing_consent_names_the_user() {
    let app = TestApp::spawn(2).await;

    let response = app.post_login("alice", "wonderland", false).await;

    assert_eq!(location(&response), Some("/login"));
    assert!(
        app.login_page()
            .await
            .contains("Hey alice! No entry without accepting terms!")
    );
}

#[tokio::test]
async fn unlucky_login_is_sent_back() {
    let app = TestApp::spawn(1).await;

    let response = app.post_login("alice", "wonderland", true).await;

    assert_eq!(location(&response), Some("/login"));
    assert!(app.login_page().await.contains("Bad luck! Try again!"));

    let admin = app.get("/admin").await;
    assert_eq!(admin.status().as_u16(), 303);
}

#[tokio::test]
async fn error_message_is_shown_only_once() {
    let app = TestApp::spawn(2).await;

    app.post_login("alice", "looking-glass", true).await;

    assert!(app.login_page().await.contains("Invalid credentials."));
    assert!(!app.login_page().await.contains("Invalid credentials."));
}

#[tokio::test]
async fn anonymous_admin_visit_goes_through_the_login_form() {
    let app = TestApp::spawn(2).await;

    let response = app.get("/admin").await;
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/login"));

    let response = app.post_login("alice", "wonderland", true).await;
    assert_eq!(location(&response), Some("/admin"));
}

#[tokio::test]
async fn argon2_hashed_user_logs_in() {
    let app = TestApp::spawn_with_argon2(2).await;

    let response = app.post_login("alice", "looking-glass", true).await;
    assert_eq!(location(&response), Some("/login"));
    assert!(app.login_page().await.contains("Invalid credentials."));

    let response = app.post_login("alice", "wonderland", true).await;
    assert_eq!(location(&response), Some("/admin"));
    assert!(app.get("/admin").await.text().await.unwrap().contains("Welcome, alice!"));
}

#[tokio::test]
async fn login_moves_the_session_to_a_new_id() {
    let app = TestApp::spawn(2).await;

    let response = app.post_login("alice", "looking-glass", true).await;
    let pre_login_id = session_cookie(&response).expect("failed login keeps a session");

    let response = app.post_login("alice", "wonderland", true).await;
    let authenticated_id = session_cookie(&response).expect("login sets a session cookie");

    assert_ne!(authenticated_id, pre_login_id);

    let with_old_id = app.get_with_session("/admin", pre_login_id).await;
    assert_eq!(with_old_id.status().as_u16(), 303);
    assert_eq!(location(&with_old_id), Some("/login"));

    let with_new_id = app.get_with_session("/admin", authenticated_id).await;
    assert_eq!(with_new_id.status().as_u16(), 200);
}

#[tokio::test]
async fn anonymous_visits_do_not_create_sessions() {
    let app = TestApp::spawn(2).await;

    for _ in 0..50 {
        let response = app.get("/login").await;
        assert_eq!(response.status().as_u16(), 200);
        assert!(response.headers().get("set-cookie").is_none());
    }

    assert!(app.sessions.is_empty());
}
