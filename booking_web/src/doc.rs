//! OpenAPIドキュメント
//!
//! `/openapi.json` で公開する。

use axum::Json;
use utoipa::OpenApi;

use crate::dto::{BookingBody, BookingResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "STD24120",
        description = "This is a specification of STD24120",
        version = "1.0.0"
    ),
    paths(crate::routes::list_bookings, crate::routes::create_bookings),
    components(schemas(BookingBody, BookingResponse)),
    tags((name = "booking", description = "Réservations de chambres"))
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
