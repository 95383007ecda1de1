use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use booking::domain::core::BookingRepository;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::doc;
use crate::dto::{self, BookingBody, BookingResponse};
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new<R>(bookings: R) -> Self
    where
        R: BookingRepository + 'static,
    {
        Self {
            bookings: Arc::new(bookings),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(doc::openapi))
        .route("/booking", get(list_bookings).post(create_bookings))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// GET /booking - 予約一覧
#[utoipa::path(
    get,
    path = "/booking",
    summary = "Lister les réservations",
    responses(
        (status = 200, description = "Toutes les réservations, dans l'ordre de création", body = [BookingResponse]),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "booking"
)]
pub(crate) async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.bookings.find_all().await?;
    Ok(Json(bookings.iter().map(BookingResponse::from).collect()))
}

/// POST /booking - 予約の一括登録
///
/// Content-Typeに関わらず本文をJSONとして読む。
#[utoipa::path(
    post,
    path = "/booking",
    summary = "Créer des réservations (liste)",
    description = "Refuse la liste entière si une chambre est déjà réservée à la même date. Les chambres valides sont 1..9.",
    request_body = [BookingBody],
    responses(
        (status = 200, description = "Toutes les réservations après création", body = [BookingResponse]),
        (status = 409, description = "La chambre n'est pas disponible à cette date"),
        (status = 422, description = "Requête invalide"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "booking"
)]
pub(crate) async fn create_bookings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bodies = serde_json::from_slice::<Vec<BookingBody>>(&body)?;
    let requests = dto::into_requests(bodies).map_err(|e| {
        debug!("入力エラー: {:?}", e);
        e
    })?;
    let bookings = state.bookings.create_all(requests).await?;
    Ok(Json(bookings.iter().map(BookingResponse::from).collect()))
}
