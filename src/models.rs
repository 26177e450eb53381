use serde::{Deserialize, Serialize};

/// A single item held by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Request body for creating an item
///
/// Any `id` sent by the client is ignored; the store assigns it.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
