use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;
use color_eyre::eyre::eyre;

use crate::{
    app_state::AppState,
    domain::{PortfolioAPIError, PortfolioStoreError},
    utils::auth::require_authenticated,
};

use super::PortfolioResponse;

#[tracing::instrument(name = "Get portfolio", skip_all)]
pub async fn get_portfolio(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, PortfolioAPIError> {
    let user_id = require_authenticated(&jar)?;

    let portfolio = state
        .portfolio_store
        .read()
        .await
        .get_portfolio(&user_id)
        .await
        .map_err(|e| match e {
            PortfolioStoreError::PortfolioNotFound => {
                PortfolioAPIError::PortfolioNotFound
            }
            err => PortfolioAPIError::UnexpectedError(eyre!(err)),
        })?;

    Ok((
        StatusCode::OK,
        Json(PortfolioResponse {
            user_id: portfolio.user_id.as_ref().to_string(),
            title: portfolio.title,
            description: portfolio.description,
        }),
    ))
}
