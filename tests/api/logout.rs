use crate::helpers::{get_session, TestApp};
use portfolio_maker::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_without_session_cookie(app: &mut TestApp) {
    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.json::<ErrorResponse>().await.unwrap().error,
        "Missing token"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn logout_clears_the_session(app: &mut TestApp) {
    get_session(app).await;

    // The session works before logout.
    assert_eq!(
        app.get_subscription_status().await.status().as_u16(),
        200
    );

    assert_eq!(app.post_logout().await.status().as_u16(), 200);

    // And is gone afterwards.
    assert_eq!(
        app.get_subscription_status().await.status().as_u16(),
        401
    );
}
