use axum::Json;

use hipis_core::envelope::Envelope;

pub async fn ping() -> Json<Envelope<&'static str>> {
    Json(Envelope::ok("ping"))
}
