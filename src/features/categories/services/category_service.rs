use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all categories (flat, unpaged)
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.find_all().await?;
        tracing::info!("Listed {} categories", categories.len());
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
