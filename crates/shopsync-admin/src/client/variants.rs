//! Variants and product images.

use serde_json::Value;

use crate::error::AdminError;

use super::AdminClient;

impl AdminClient {
    /// `POST products/{product_id}/variants.json`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn create_variant(
        &self,
        product_id: i64,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products", &product_id.to_string(), "variants.json"]);
        let created = self.post_json("create variant", &url, payload).await?;
        if created.is_some() {
            tracing::info!(product_id, "created variant");
        }
        Ok(created)
    }

    /// `PUT variants/{id}.json`, where `id` is read from `payload.variant.id`.
    ///
    /// # Errors
    ///
    /// [`AdminError::MissingField`] if the payload does not carry an integer
    /// `variant.id`; otherwise transport and JSON failures.
    pub async fn update_variant(&self, payload: &Value) -> Result<Option<Value>, AdminError> {
        let variant_id = variant_id_of(payload)?;
        let url = self.resource_url(&["variants", &format!("{variant_id}.json")]);
        let updated = self.put_json("update variant", &url, payload).await?;
        if updated.is_some() {
            tracing::info!(variant_id, "updated variant");
        }
        Ok(updated)
    }

    /// `POST products/{product_id}/images.json`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn create_product_image(
        &self,
        product_id: i64,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&["products", &product_id.to_string(), "images.json"]);
        self.post_json("create product image", &url, payload).await
    }

    /// `PUT products/{product_id}/images/{image_id}.json`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn update_product_image(
        &self,
        product_id: i64,
        image_id: i64,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        let url = self.resource_url(&[
            "products",
            &product_id.to_string(),
            "images",
            &format!("{image_id}.json"),
        ]);
        self.put_json("update product image", &url, payload).await
    }
}

/// Reads `variant.id` from an update payload. Ids given as numeric strings
/// are accepted too.
pub(crate) fn variant_id_of(payload: &Value) -> Result<i64, AdminError> {
    let id = &payload["variant"]["id"];
    id.as_i64()
        .or_else(|| id.as_str().and_then(|s| s.parse().ok()))
        .ok_or_else(|| AdminError::MissingField {
            context: "update variant payload".to_owned(),
            field: "variant.id".to_owned(),
        })
}
