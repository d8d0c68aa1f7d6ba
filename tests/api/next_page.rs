use crate::helpers::{get_session, TestApp};
use test_context::test_context;

async fn next_page_location(app: &TestApp) -> String {
    let response = app.get_next_page().await;
    assert_eq!(response.status().as_u16(), 302);

    response
        .headers()
        .get("location")
        .expect("No Location header on redirect")
        .to_str()
        .unwrap()
        .to_owned()
}

#[test_context(TestApp)]
#[tokio::test]
async fn unauthenticated_callers_are_sent_to_sign_in(app: &mut TestApp) {
    assert_eq!(next_page_location(app).await, "/auth/signin");
}

#[test_context(TestApp)]
#[tokio::test]
async fn routing_follows_the_onboarding_flag(app: &mut TestApp) {
    get_session(app).await;

    // Fresh account: the onboarding form comes first.
    assert_eq!(next_page_location(app).await, "/form");

    assert_eq!(app.post_submit_form().await.status().as_u16(), 200);

    // Once the form is filled, the builder is next.
    assert_eq!(next_page_location(app).await, "/portfolio-builder");
}

#[test_context(TestApp)]
#[tokio::test]
async fn logout_routes_back_to_sign_in(app: &mut TestApp) {
    get_session(app).await;
    assert_eq!(app.post_logout().await.status().as_u16(), 200);

    assert_eq!(next_page_location(app).await, "/auth/signin");
}
