use portfolio_maker::{
    app_state::{
        AppState, PortfolioStoreType, UserStoreType,
        VerificationTokenStoreType,
    },
    services::{
        data_stores::{
            HashmapPortfolioStore, HashmapUserStore,
            HashmapVerificationTokenStore,
        },
        logging_email_client::LoggingEmailClient,
    },
    utils::constants::test,
    Application,
};
use reqwest::{cookie::Jar, Response};
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub cookie_jar: Arc<Jar>,
    pub http_client: reqwest::Client,
    pub user_store: UserStoreType,
    pub token_store: VerificationTokenStoreType,
    pub portfolio_store: PortfolioStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        if std::env::var("JWT_SECRET").is_err() {
            std::env::set_var("JWT_SECRET", "test-jwt-secret");
        }

        let user_store: UserStoreType =
            Arc::new(RwLock::new(HashmapUserStore::default()));
        let token_store: VerificationTokenStoreType =
            Arc::new(RwLock::new(HashmapVerificationTokenStore::default()));
        let portfolio_store: PortfolioStoreType =
            Arc::new(RwLock::new(HashmapPortfolioStore::default()));
        let email_client = Arc::new(LoggingEmailClient);

        let app_state = AppState::new(
            user_store.clone(),
            token_store.clone(),
            portfolio_store.clone(),
            email_client,
        );

        let app = Application::build(app_state, test::APP_ADDRESS)
            .await
            .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let cookie_jar = Arc::new(Jar::default());
        // Redirects stay unfollowed so tests can assert on 302 responses.
        let http_client = reqwest::Client::builder()
            .cookie_provider(cookie_jar.clone())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            cookie_jar,
            http_client,
            user_store,
            token_store,
            portfolio_store,
        }
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/auth/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_confirm_email(&self, token: &str) -> Response {
        self.http_client
            .get(format!("{}/auth/confirm-email", &self.address))
            .query(&[("token", token)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self) -> Response {
        self.http_client
            .post(format!("{}/auth/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_user_status(&self, user_id: &str) -> Response {
        self.http_client
            .get(format!("{}/user/status", &self.address))
            .query(&[("userId", user_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_user_summary(&self, user_id: &str) -> Response {
        self.http_client
            .get(format!("{}/user/summary", &self.address))
            .query(&[("userId", user_id)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_subscription_status(&self) -> Response {
        self.http_client
            .get(format!("{}/user/subscription-status", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_submit_form(&self) -> Response {
        self.http_client
            .post(format!("{}/user/submit-form", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_portfolio<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/portfolio", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_portfolio(&self) -> Response {
        self.http_client
            .get(format!("{}/portfolio", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_next_page(&self) -> Response {
        self.http_client
            .get(format!("{}/next-page", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub async fn get_json_response_body(response: Response) -> Value {
    response
        .json()
        .await
        .expect("failed to parse response body JSON")
}

/// Creates an account and returns `(user_id, verification_token)` parsed
/// out of the signup response.
pub async fn signup(
    app: &mut TestApp,
    name: &str,
    email: &str,
    password: &str,
) -> (String, String) {
    let response = app
        .post_signup(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .await;
    assert_eq!(
        response.status().as_u16(),
        201,
        "Failed to sign up. email: {email}"
    );

    let body = get_json_response_body(response).await;

    let user_id = body
        .get("userId")
        .expect("No userId in response")
        .as_str()
        .unwrap()
        .to_owned();

    let confirmation_link = body
        .get("confirmationLink")
        .expect("No confirmationLink in response")
        .as_str()
        .unwrap()
        .to_owned();

    let token = confirmation_link
        .split("token=")
        .nth(1)
        .expect("Confirmation link carries no token")
        .to_owned();

    (user_id, token)
}

pub async fn login(app: &mut TestApp, email: &str, password: &str) {
    assert_eq!(
        app.post_login(&serde_json::json!({
            "email": email,
            "password": password
        }))
        .await
        .status()
        .as_u16(),
        200,
        "Failed to log in. email: {email}, password: {password}"
    );
}

/// Signup plus login in one go; returns `(user_id, email)`.
pub async fn get_session(app: &mut TestApp) -> (String, String) {
    let email = get_random_email();
    let password = "longpassword";

    let (user_id, _token) = signup(app, "Ada", &email, password).await;
    login(app, &email, password).await;

    (user_id, email)
}
