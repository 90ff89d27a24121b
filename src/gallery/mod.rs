// Gallery admin workflow: registry, validation, tag composition, and the
// gateway to the remote gallery store.
pub mod categories;
mod error;
mod handlers;
pub mod store;
pub mod tags;
pub mod types;
pub mod validation;

pub use categories::{Category, CategoryEntry, list_categories};
pub use error::GalleryError;
pub use handlers::{
    bulk_delete_handler, categories_handler, create_handler, delete_handler, list_handler,
    update_handler,
};
pub use types::*;

use std::sync::Arc;
use store::DynGalleryStore;
use tokio::sync::RwLock;
use tracing::debug;

pub type SharedGallery = Arc<GalleryManager>;

/// Orchestrates the admin workflow against the gallery store. Holds only a
/// transient copy of the full listing; the store remains the source of
/// truth and every mutation drops the copy.
pub struct GalleryManager {
    store: DynGalleryStore,
    list_cache: RwLock<Option<Vec<GalleryItem>>>,
}

impl GalleryManager {
    pub fn new(store: DynGalleryStore) -> Self {
        Self {
            store,
            list_cache: RwLock::new(None),
        }
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Full listing, served from the transient cache when warm. Category
    /// filtering happens locally so one store round trip covers all admin
    /// filter views.
    pub async fn list(
        &self,
        category: Option<Category>,
        featured_only: bool,
    ) -> Result<Vec<GalleryItem>, GalleryError> {
        let cached = self.list_cache.read().await.clone();
        let items = match cached {
            Some(items) => items,
            None => {
                let items = self.store.list(None).await?;
                debug!("gallery listing refreshed: {} items", items.len());
                *self.list_cache.write().await = Some(items.clone());
                items
            }
        };

        Ok(items
            .into_iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .filter(|item| !featured_only || item.featured)
            .collect())
    }

    pub async fn create(
        &self,
        submission: &GallerySubmission,
    ) -> Result<GalleryItem, GalleryError> {
        let valid = validation::validate(submission).map_err(GalleryError::Validation)?;
        let item = self.store.create(&valid).await?;
        self.invalidate().await;
        Ok(item)
    }

    pub async fn update(
        &self,
        id: i64,
        submission: &GallerySubmission,
    ) -> Result<GalleryItem, GalleryError> {
        let valid = validation::validate(submission).map_err(GalleryError::Validation)?;
        let item = self.store.update(id, &valid).await?;
        self.invalidate().await;
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> Result<(), GalleryError> {
        self.store.delete(id).await?;
        self.invalidate().await;
        Ok(())
    }

    pub async fn bulk_delete(&self, ids: &[i64]) -> Result<usize, GalleryError> {
        let removed = self.store.bulk_delete(ids).await?;
        self.invalidate().await;
        Ok(removed)
    }

    async fn invalidate(&self) {
        *self.list_cache.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::store::InMemoryGalleryStore;

    fn manager() -> GalleryManager {
        GalleryManager::new(Arc::new(InMemoryGalleryStore::new()))
    }

    fn submission(category: &str, title: &str) -> GallerySubmission {
        GallerySubmission {
            category: Some(category.to_string()),
            title: Some(title.to_string()),
            image_url: Some("/uploads/x.jpg".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_validates_before_touching_the_store() {
        let manager = manager();
        let err = manager
            .create(&submission("not-a-category", "Title"))
            .await
            .unwrap_err();
        assert!(matches!(err, GalleryError::Validation(_)));
        assert!(manager.list(None, false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn listing_is_cached_until_a_mutation() {
        let manager = manager();
        manager
            .create(&submission("pool-deck", "Pool"))
            .await
            .unwrap();

        // Warm the cache, then mutate and expect the new item to appear.
        assert_eq!(manager.list(None, false).await.unwrap().len(), 1);
        manager
            .create(&submission("dining-area", "Dining"))
            .await
            .unwrap();
        assert_eq!(manager.list(None, false).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn category_and_featured_filters_apply_locally() {
        let manager = manager();
        let mut featured = submission("pool-deck", "Pool");
        featured.featured = true;
        manager.create(&featured).await.unwrap();
        manager
            .create(&submission("pool-deck", "Deck chairs"))
            .await
            .unwrap();
        manager
            .create(&submission("koggala-lake", "Lake"))
            .await
            .unwrap();

        let pool = manager
            .list(Some(Category::PoolDeck), false)
            .await
            .unwrap();
        assert_eq!(pool.len(), 2);
        let featured = manager.list(None, true).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "Pool");
    }
}
