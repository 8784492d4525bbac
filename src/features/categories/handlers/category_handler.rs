use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};

/// List all event categories
///
/// Small reference dataset, returned unpaged.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::routes;
    use crate::shared::test_helpers::{seeded_store, FailingStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_list_categories() {
        let (store, fixture) = seeded_store();
        let server =
            TestServer::new(routes::routes(Arc::new(CategoryService::new(store)))).unwrap();

        let response = server.get("/api/categories").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["data"][0]["id"], fixture.festival.id);
        assert_eq!(body["data"][0]["name"], "축제");
    }

    #[tokio::test]
    async fn test_legacy_categories_path_serves_same_list() {
        let (store, _) = seeded_store();
        let server =
            TestServer::new(routes::routes(Arc::new(CategoryService::new(store)))).unwrap();

        let primary: serde_json::Value = server.get("/api/categories").await.json();
        let legacy: serde_json::Value = server.get("/api/events/categories").await.json();
        assert_eq!(primary, legacy);
    }

    #[tokio::test]
    async fn test_database_failure_is_internal_error() {
        let server = TestServer::new(routes::routes(Arc::new(CategoryService::new(Arc::new(
            FailingStore,
        )))))
        .unwrap();

        let response = server.get("/api/categories").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error occurred");
    }
}
