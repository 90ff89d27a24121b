use super::categories::Category;
use super::error::GalleryError;
use super::types::{GalleryItem, ValidSubmission};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

/// Gateway to the gallery store. The store is the sole source of truth for
/// gallery records; implementations only shape requests and responses.
#[async_trait]
pub trait GalleryStore: Send + Sync {
    async fn list(&self, category: Option<Category>) -> Result<Vec<GalleryItem>, GalleryError>;
    async fn create(&self, submission: &ValidSubmission) -> Result<GalleryItem, GalleryError>;
    async fn update(
        &self,
        id: i64,
        submission: &ValidSubmission,
    ) -> Result<GalleryItem, GalleryError>;
    async fn delete(&self, id: i64) -> Result<(), GalleryError>;
    async fn bulk_delete(&self, ids: &[i64]) -> Result<usize, GalleryError>;
    fn name(&self) -> &str;
}

pub type DynGalleryStore = Arc<dyn GalleryStore>;

#[derive(Serialize)]
struct BulkDeleteRequest<'a> {
    ids: &'a [i64],
}

#[derive(Deserialize)]
struct BulkDeleteReply {
    removed: usize,
}

/// Production gateway speaking to the remote REST store.
pub struct HttpGalleryStore {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGalleryStore {
    pub fn new(base_url: Url, timeout: std::time::Duration) -> Result<Self, GalleryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GalleryError::StoreUnavailable(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GalleryError> {
        self.base_url
            .join(path)
            .map_err(|e| GalleryError::BadStoreResponse(format!("bad endpoint {}: {}", path, e)))
    }

    async fn check_item_response(
        response: reqwest::Response,
        id: Option<i64>,
    ) -> Result<GalleryItem, GalleryError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND
            && let Some(id) = id
        {
            return Err(GalleryError::NotFound(id));
        }
        if !status.is_success() {
            return Err(GalleryError::StoreUnavailable(format!(
                "store answered {}",
                status
            )));
        }
        response
            .json::<GalleryItem>()
            .await
            .map_err(|e| GalleryError::BadStoreResponse(e.to_string()))
    }
}

#[async_trait]
impl GalleryStore for HttpGalleryStore {
    async fn list(&self, category: Option<Category>) -> Result<Vec<GalleryItem>, GalleryError> {
        let mut url = self.endpoint("gallery")?;
        if let Some(category) = category {
            url.query_pairs_mut()
                .append_pair("category", category.as_str());
        }

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(GalleryError::StoreUnavailable(format!(
                "store answered {}",
                response.status()
            )));
        }
        response
            .json::<Vec<GalleryItem>>()
            .await
            .map_err(|e| GalleryError::BadStoreResponse(e.to_string()))
    }

    async fn create(&self, submission: &ValidSubmission) -> Result<GalleryItem, GalleryError> {
        let url = self.endpoint("gallery")?;
        let response = self.client.post(url).json(submission).send().await?;
        Self::check_item_response(response, None).await
    }

    async fn update(
        &self,
        id: i64,
        submission: &ValidSubmission,
    ) -> Result<GalleryItem, GalleryError> {
        let url = self.endpoint(&format!("gallery/{}", id))?;
        let response = self.client.put(url).json(submission).send().await?;
        Self::check_item_response(response, Some(id)).await
    }

    async fn delete(&self, id: i64) -> Result<(), GalleryError> {
        let url = self.endpoint(&format!("gallery/{}", id))?;
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GalleryError::NotFound(id));
        }
        if !status.is_success() {
            return Err(GalleryError::StoreUnavailable(format!(
                "store answered {}",
                status
            )));
        }
        Ok(())
    }

    async fn bulk_delete(&self, ids: &[i64]) -> Result<usize, GalleryError> {
        let url = self.endpoint("gallery/bulk-delete")?;
        let response = self
            .client
            .post(url)
            .json(&BulkDeleteRequest { ids })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GalleryError::StoreUnavailable(format!(
                "store answered {}",
                response.status()
            )));
        }
        // The store reports how many records actually matched; ids it never
        // held do not count.
        response
            .json::<BulkDeleteReply>()
            .await
            .map(|reply| reply.removed)
            .map_err(|e| GalleryError::BadStoreResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "HTTP gallery store"
    }
}

/// In-memory store used in tests and when running without a remote store
/// configured. Assigns sequential ids starting at 1.
pub struct InMemoryGalleryStore {
    items: RwLock<Vec<GalleryItem>>,
    next_id: RwLock<i64>,
}

impl InMemoryGalleryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }

    fn item_from(id: i64, submission: &ValidSubmission) -> GalleryItem {
        GalleryItem {
            id,
            title: submission.title.clone(),
            description: submission.description.clone(),
            category: submission.category,
            tags: submission.tags.clone(),
            media_type: submission.media_type,
            image_url: submission.image_url.clone(),
            featured: submission.featured,
            sort_order: submission.sort_order,
        }
    }
}

impl Default for InMemoryGalleryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GalleryStore for InMemoryGalleryStore {
    async fn list(&self, category: Option<Category>) -> Result<Vec<GalleryItem>, GalleryError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .cloned()
            .collect())
    }

    async fn create(&self, submission: &ValidSubmission) -> Result<GalleryItem, GalleryError> {
        let mut next_id = self.next_id.write().await;
        let item = Self::item_from(*next_id, submission);
        *next_id += 1;
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: i64,
        submission: &ValidSubmission,
    ) -> Result<GalleryItem, GalleryError> {
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(GalleryError::NotFound(id))?;
        *slot = Self::item_from(id, submission);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), GalleryError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(GalleryError::NotFound(id));
        }
        Ok(())
    }

    async fn bulk_delete(&self, ids: &[i64]) -> Result<usize, GalleryError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| !ids.contains(&item.id));
        Ok(before - items.len())
    }

    fn name(&self) -> &str {
        "in-memory gallery store"
    }
}
