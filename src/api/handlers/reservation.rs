//! Mock reservation form. Nothing is sent or stored anywhere.

use std::time::Duration;

use axum::extract::{Form, State};
use axum::response::Redirect;
use axum::Json;
use maud::Markup;
use tracing::{debug, info};
use uuid::Uuid;

use super::ensure_enabled;
use super::pages::render;
use crate::reservation::{Field, ReservationDraft};
use crate::session::Visitor;
use crate::types::{AppError, ReservationRequest, ReservationResponse, Result};
use crate::AppState;

/// Validate, wait out the fixed delay and move the form to its success view.
///
/// The form is changed in two steps around the delay so requests of the
/// same visitor that finish meanwhile keep their changes.
async fn process(
    state: &AppState,
    visitor: &Visitor,
    draft: ReservationDraft,
) -> Result<std::result::Result<Uuid, Vec<Field>>> {
    let delay = Duration::from_millis(state.config.config().site.reservation_delay_ms);

    let submitted = visitor.update(|s| s.reservation.submit(draft)).await?;

    let ticket = match submitted {
        Ok(ticket) => ticket,
        Err(missing) => {
            debug!(?missing, "Reservation is missing required fields");
            return Ok(Err(missing));
        }
    };

    tokio::time::sleep(delay).await;

    if visitor.update(|s| s.reservation.complete(ticket)).await? {
        info!(%ticket, "Reservation received");
    }

    Ok(Ok(ticket))
}

fn reservation_enabled(state: &AppState) -> Result<()> {
    ensure_enabled(state.config.config().site.features.reservation, "Reservation")
}

/// `GET /reservation` opens the modal with an empty form.
pub async fn open(State(state): State<AppState>, visitor: Visitor) -> Result<Markup> {
    reservation_enabled(&state)?;
    visitor.update(|s| s.reservation.open()).await?;
    render(&state, &visitor).await
}

/// `POST /reservation`
///
/// A form with blank required fields is shown again with those fields
/// marked.
pub async fn submit(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(req): Form<ReservationRequest>,
) -> Result<Redirect> {
    reservation_enabled(&state)?;

    visitor.update(|s| s.reservation.open = true).await?;

    // Missing fields are shown from the stored form
    let _ = process(&state, &visitor, req.into()).await?;
    Ok(Redirect::to("/"))
}

/// `POST /reservation/close`
pub async fn close(State(state): State<AppState>, visitor: Visitor) -> Result<Redirect> {
    reservation_enabled(&state)?;
    visitor.update(|s| s.reservation.close()).await?;
    Ok(Redirect::to("/"))
}

/// Submit a reservation request
#[utoipa::path(
    post,
    path = "/api/reservation",
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Request received", body = ReservationResponse),
        (status = 404, description = "Reservation disabled"),
        (status = 422, description = "Required fields are blank")
    ),
    tag = "reservation"
)]
pub async fn reservation_api(
    State(state): State<AppState>,
    visitor: Visitor,
    Json(req): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>> {
    reservation_enabled(&state)?;

    match process(&state, &visitor, req.into()).await? {
        Ok(ticket) => Ok(Json(ReservationResponse {
            ticket,
            status: "received".to_string(),
        })),
        Err(missing) => Err(AppError::MissingFields(
            missing.iter().map(|f| f.as_str().to_string()).collect(),
        )),
    }
}
