use crate::helpers::{
    get_json_response_body, get_random_email, signup, TestApp,
};
use portfolio_maker::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_and_session_cookie_for_valid_credentials(
    app: &mut TestApp,
) {
    let email = get_random_email();
    let (user_id, _token) =
        signup(app, "Ada", &email, "longpassword").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "longpassword"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .headers()
        .get("set-cookie")
        .expect("No session cookie in login response")
        .to_str()
        .unwrap()
        .to_owned();
    assert!(cookie.starts_with("jwt="), "Unexpected cookie: {cookie}");

    let body = get_json_response_body(response).await;
    assert_eq!(
        body.get("userId").and_then(|id| id.as_str()),
        Some(user_id.as_str())
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_for_wrong_password(app: &mut TestApp) {
    let email = get_random_email();
    signup(app, "Ada", &email, "longpassword").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "wrongpassword"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Incorrect credentials"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_401_for_unknown_email(app: &mut TestApp) {
    let response = app
        .post_login(&serde_json::json!({
            "email": get_random_email(),
            "password": "longpassword"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_invalid_input(app: &mut TestApp) {
    let test_cases = [
        serde_json::json!({
            "email": "not-an-email",
            "password": "longpassword"
        }),
        serde_json::json!({
            "email": get_random_email(),
            "password": "short"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_login(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {}",
            test_case
        );
    }
}
