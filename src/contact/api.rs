use axum::{extract::Extension, http::StatusCode, routing::post, Json, Router};

use super::{ContactFormData, ContactRelay, ContactResponse};

pub async fn contact_handler(
    Extension(relay): Extension<ContactRelay>,
    Json(form): Json<ContactFormData>,
) -> (StatusCode, Json<ContactResponse>) {
    let (status, response) = relay.submit(&form).await;
    (status, Json(response))
}

pub async fn method_not_allowed() -> (StatusCode, Json<ContactResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ContactResponse::method_not_allowed()),
    )
}

/// `POST /api/contact`. Any other method gets a JSON 405.
pub fn contact_router<S>(relay: ContactRelay) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/contact",
            post(contact_handler).fallback(method_not_allowed),
        )
        .layer(Extension(relay))
}
