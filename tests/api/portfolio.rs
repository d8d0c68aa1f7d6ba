use crate::helpers::{get_json_response_body, get_session, TestApp};
use portfolio_maker::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn portfolio_endpoints_require_a_session(app: &mut TestApp) {
    let response = app
        .post_portfolio(&serde_json::json!({
            "title": "My work",
            "description": "Selected projects"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    assert_eq!(app.get_portfolio().await.status().as_u16(), 401);
}

#[test_context(TestApp)]
#[tokio::test]
async fn get_returns_404_before_first_save(app: &mut TestApp) {
    get_session(app).await;

    let response = app.get_portfolio().await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Portfolio not found"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn save_then_get_round_trips(app: &mut TestApp) {
    let (user_id, _email) = get_session(app).await;

    let response = app
        .post_portfolio(&serde_json::json!({
            "title": "My work",
            "description": "Selected projects"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.get_portfolio().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(
        body.get("userId").and_then(|id| id.as_str()),
        Some(user_id.as_str())
    );
    assert_eq!(
        body.get("title").and_then(|t| t.as_str()),
        Some("My work")
    );
    assert_eq!(
        body.get("description").and_then(|d| d.as_str()),
        Some("Selected projects")
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn second_save_overwrites_the_first(app: &mut TestApp) {
    get_session(app).await;

    app.post_portfolio(&serde_json::json!({
        "title": "Draft",
        "description": ""
    }))
    .await;

    let response = app
        .post_portfolio(&serde_json::json!({
            "title": "Final",
            "description": "Shipped"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(app.get_portfolio().await).await;
    assert_eq!(body.get("title").and_then(|t| t.as_str()), Some("Final"));
}
