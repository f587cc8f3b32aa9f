use crate::helpers::{TestApp, location};

#[tokio::test]
async fn logout_ends_the_session() {
    let app = TestApp::spawn(2).await;
    app.post_login("alice", "wonderland", true).await;
    assert_eq!(app.get("/admin").await.status().as_u16(), 200);

    let response = app.post("/logout").await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(location(&response), Some("/login"));
    assert!(app.sessions.is_empty());

    let admin = app.get("/admin").await;
    assert_eq!(admin.status().as_u16(), 303);
    assert_eq!(location(&admin), Some("/login"));
}

#[tokio::test]
async fn logout_is_not_reachable_with_a_get() {
    let app = TestApp::spawn(2).await;
    app.post_login("alice", "wonderland", true).await;

    let response = app.get("/logout").await;

    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(app.get("/admin").await.status().as_u16(), 200);
}
