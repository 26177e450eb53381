use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List all items
///
/// Returns every item in insertion order: the seeded items first, then
/// created items in creation order. An empty store yields `[]`.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = [Item])
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.store.list();
    tracing::debug!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::NewItem;
    use crate::store::ItemStore;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    fn setup_test_app(store: ItemStore) -> Router {
        Router::new()
            .route(crate::routes::ITEMS, get(list_handler))
            .with_state(AppState::new(store, Config::default()))
    }

    async fn list(app: Router) -> Vec<Item> {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_seeded_items() {
        let items = list(setup_test_app(ItemStore::seeded())).await;

        assert_eq!(
            items,
            vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                    price: 10.0,
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                    price: 20.0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let app = setup_test_app(ItemStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_includes_created_items_last() {
        let store = ItemStore::seeded();
        store.create(NewItem {
            name: "Widget".to_string(),
            price: 4.25,
        });

        let items = list(setup_test_app(store)).await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[2].id, 3);
        assert_eq!(items[2].name, "Widget");
    }
}
