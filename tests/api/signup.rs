use crate::helpers::{
    get_json_response_body, get_random_email, TestApp,
};
use portfolio_maker::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_input(app: &mut TestApp) {
    let random_email = get_random_email();

    let test_cases = [
        serde_json::json!({
            "email": random_email,
            "password": "longpassword"
        }),
        serde_json::json!({
            "name": "Ada",
            "password": "longpassword"
        }),
        serde_json::json!({
            "name": "Ada",
            "email": random_email
        }),
        serde_json::json!({
            "name": "Ada",
            "email": random_email,
            "password": 12345678
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_and_confirmation_link_for_valid_requests(
    app: &mut TestApp,
) {
    let response = app
        .post_signup(&serde_json::json!({
            "name": "Ada",
            "email": get_random_email(),
            "password": "longpassword"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body = get_json_response_body(response).await;

    assert_eq!(
        body.get("message").and_then(|m| m.as_str()),
        Some("User created successfully")
    );

    let user_id = body
        .get("userId")
        .and_then(|id| id.as_str())
        .expect("No userId in response");
    uuid::Uuid::try_parse(user_id).expect("userId is not a valid UUID");

    let link = body
        .get("confirmationLink")
        .and_then(|l| l.as_str())
        .expect("No confirmationLink in response");
    assert!(
        link.contains("/auth/confirm-email?token="),
        "Unexpected confirmation link: {link}"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_invalid_input(app: &mut TestApp) {
    let test_cases = [
        serde_json::json!({
            "name": "Ada",
            "email": "not-an-email",
            "password": "longpassword"
        }),
        serde_json::json!({
            "name": "Ada",
            "email": "",
            "password": "longpassword"
        }),
        serde_json::json!({
            "name": "",
            "email": get_random_email(),
            "password": "longpassword"
        }),
        serde_json::json!({
            "name": "Ada",
            "email": get_random_email(),
            "password": "short"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(&test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should fail with HTTP400 for input: {}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_if_email_exists(app: &mut TestApp) {
    let email = get_random_email();

    let request_data = serde_json::json!({
        "name": "Ada",
        "email": email,
        "password": "longpassword"
    });

    let response = app.post_signup(&request_data).await;
    assert_eq!(response.status().as_u16(), 201);
    let body = get_json_response_body(response).await;
    let user_id = body
        .get("userId")
        .and_then(|id| id.as_str())
        .unwrap()
        .to_owned();

    let imposter_data = serde_json::json!({
        "name": "Imposter",
        "email": email,
        "password": "otherpassword"
    });

    let response = app.post_signup(&imposter_data).await;
    assert_eq!(
        response.status().as_u16(),
        409,
        "Should fail with HTTP409 (account with email already exists)"
    );
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "User already exists".to_owned()
    );

    // The existing row must be untouched by the rejected signup.
    let response = app.get_user_summary(&user_id).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = get_json_response_body(response).await;
    assert_eq!(body.get("name").and_then(|n| n.as_str()), Some("Ada"));
}
