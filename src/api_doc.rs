use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{HealthResponse, Item, NewItem};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-service API",
        version = "1.0.0",
        description = "A minimal in-memory item CRUD service"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::create::create_handler
    ),
    components(
        schemas(
            Item,
            NewItem,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ApiDoc;
