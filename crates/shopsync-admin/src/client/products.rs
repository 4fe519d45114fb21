//! Product CRUD, counts, and the cached full listing.

use std::time::SystemTime;

use serde_json::Value;

use crate::error::AdminError;
use crate::payload::concat_array_field;

use super::{page_bodies, AdminClient, PRODUCTS_PAGE_LIMIT};

impl AdminClient {
    /// `POST products.json`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn create_product(&self, payload: &Value) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products.json"]);
        let created = self.post_json("create product", &url, payload).await?;
        if created.is_some() {
            tracing::info!("created product");
        }
        Ok(created)
    }

    /// `PUT products/{product_id}.json`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn update_product(
        &self,
        product_id: i64,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products", &format!("{product_id}.json")]);
        let updated = self.put_json("update product", &url, payload).await?;
        if updated.is_some() {
            tracing::info!(product_id, "updated product");
        }
        Ok(updated)
    }

    /// `GET products/{product_id}.json`, first page only.
    ///
    /// # Errors
    ///
    /// [`AdminError::NotFound`] for an unknown id; otherwise transport and
    /// JSON failures.
    pub async fn get_product(&self, product_id: i64) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products", &format!("{product_id}.json")]);
        self.get_first_json("get product", &url).await
    }

    /// `GET products/{product_id}/images.json`, first page only. Returns the
    /// whole response body (`{"images": [...]}`).
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn get_images(&self, product_id: i64) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products", &product_id.to_string(), "images.json"]);
        self.get_first_json("get product images", &url).await
    }

    /// `GET products/count.json`, first page only.
    ///
    /// # Errors
    ///
    /// [`AdminError::MissingField`] if a non-empty response has no numeric
    /// `count`; otherwise transport and JSON failures.
    pub async fn get_product_count(&self) -> Result<Option<u64>, AdminError> {
        let url = self.resource_url(&["products", "count.json"]);
        let Some(body) = self.get_first_json("product count", &url).await? else {
            return Ok(None);
        };
        body.get("count")
            .and_then(Value::as_u64)
            .map(Some)
            .ok_or_else(|| AdminError::MissingField {
                context: "product count".to_owned(),
                field: "count".to_owned(),
            })
    }

    /// `GET collections/{collection_id}/products.json`, concatenating the
    /// `products` array of every page. `None` when no page lists a product.
    ///
    /// # Errors
    ///
    /// Propagates transport, pagination and JSON failures.
    pub async fn get_products_by_collection(
        &self,
        collection_id: i64,
    ) -> Result<Option<Vec<Value>>, AdminError> {
        let url = self.resource_url(&["collections", &collection_id.to_string(), "products.json"]);
        tracing::debug!(url, "GET collection products");
        let pages = self.transport.get(&url).await?;
        let products = concat_array_field("collection products", "products", page_bodies(&pages))?;
        Ok((!products.is_empty()).then_some(products))
    }

    /// Returns the full product listing, served from the on-disk cache while
    /// it is fresh.
    ///
    /// On a miss, walks `products.json?limit=250` across all pages. A
    /// non-empty result overwrites the cache and is returned. An empty result
    /// is logged at error level and returns `None`, leaving any existing
    /// cache file untouched; a stale cache is not used as a fallback.
    ///
    /// # Errors
    ///
    /// Propagates transport, pagination and JSON failures, and
    /// [`AdminError::Cache`] if the fresh listing cannot be written.
    pub async fn get_all_products(&self) -> Result<Option<Vec<Value>>, AdminError> {
        let cache = self.cache.clone();
        let cached = tokio::task::spawn_blocking(move || cache.load_fresh(SystemTime::now()))
            .await
            .map_err(|e| self.cache_task_error(&e))?;
        if let Some(products) = cached {
            tracing::info!(
                path = %self.cache.path().display(),
                products = products.len(),
                "serving product listing from cache"
            );
            return Ok(Some(products));
        }

        let url = format!(
            "{}?limit={PRODUCTS_PAGE_LIMIT}",
            self.resource_url(&["products.json"])
        );
        tracing::debug!(url, "GET all products");
        let pages = self.transport.get(&url).await?;
        let products = concat_array_field("all products", "products", page_bodies(&pages))?;

        if products.is_empty() {
            tracing::error!(url, "No products");
            return Ok(None);
        }

        let cache = self.cache.clone();
        let products = tokio::task::spawn_blocking(move || cache.store(&products).map(|()| products))
            .await
            .map_err(|e| self.cache_task_error(&e))??;
        Ok(Some(products))
    }

    fn cache_task_error(&self, err: &tokio::task::JoinError) -> AdminError {
        AdminError::Cache {
            path: self.cache.path().display().to_string(),
            reason: err.to_string(),
        }
    }
}
