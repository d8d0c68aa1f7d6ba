use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{Portfolio, PortfolioAPIError},
    utils::auth::require_authenticated,
};

#[tracing::instrument(name = "Save portfolio", skip_all)]
pub async fn save_portfolio(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SavePortfolioRequest>,
) -> Result<impl IntoResponse, PortfolioAPIError> {
    let user_id = require_authenticated(&jar)?;

    let portfolio = Portfolio::new(
        user_id.clone(),
        request.title,
        request.description,
    );

    state
        .portfolio_store
        .write()
        .await
        .save_portfolio(portfolio.clone())
        .await
        .map_err(|e| PortfolioAPIError::UnexpectedError(eyre!(e)))?;

    Ok((
        StatusCode::CREATED,
        Json(PortfolioResponse {
            user_id: user_id.as_ref().to_string(),
            title: portfolio.title,
            description: portfolio.description,
        }),
    ))
}

#[derive(Deserialize)]
pub struct SavePortfolioRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PortfolioResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub title: String,
    pub description: String,
}
