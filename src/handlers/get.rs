use crate::error::{ApiError, ErrorResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /items/:id handler - Retrieve a single item
///
/// The path segment is parsed as an integer id. A segment that is not a
/// canonical id can never match, so it is reported as not found.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Some(id) = parse_id(&id_str) else {
        tracing::info!("Item not found, unparsable id: {:?}", id_str);
        return Err(ApiError::NotFound);
    };

    match state.store.get(id) {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found with id: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// Parse a path segment as an id: plain decimal digits, no sign, no leading zeros
fn parse_id(segment: &str) -> Option<u64> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}
