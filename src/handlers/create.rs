use crate::error::{ApiError, ErrorResponse};
use crate::models::{Item, NewItem};
use crate::routes;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /items handler - Create an item
///
/// The body is decoded as JSON whatever the `Content-Type`. Any decode
/// failure is a 400 and leaves the store untouched.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Body is not a valid item", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let new_item: NewItem = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::info!("Rejected create request: {}", e);
    })?;

    let item = state.store.create(new_item);

    tracing::info!("Successfully created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}
