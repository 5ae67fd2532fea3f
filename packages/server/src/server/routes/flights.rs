use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::flights::{FlightsError, Offer};
use crate::server::app::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for FlightsError {
    fn into_response(self) -> Response {
        let status = match &self {
            FlightsError::SourceExhausted(_) | FlightsError::NoSourcesAvailable { .. } => {
                StatusCode::BAD_GATEWAY
            }
            FlightsError::MalformedOffer { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self, status = status.as_u16(), "Failed to serve flights");

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Deduplicated flight offers from every configured source
///
/// Served from the catalog cache; a miss rebuilds the catalog before answering.
pub async fn flights_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Offer>>, FlightsError> {
    let snapshot = state.catalog.snapshot().await?;
    Ok(Json(snapshot.offers.clone()))
}
