//! Product metafields.

use serde_json::Value;

use crate::error::AdminError;
use crate::payload::concat_array_field;

use super::{page_bodies, AdminClient};

impl AdminClient {
    /// `GET products/{product_id}/metafields.json`, concatenating the
    /// `metafields` array of every page.
    ///
    /// # Errors
    ///
    /// Propagates transport, pagination and JSON failures.
    pub async fn get_product_metafields(&self, product_id: i64) -> Result<Vec<Value>, AdminError> {
        let url = self.resource_url(&["products", &product_id.to_string(), "metafields.json"]);
        tracing::debug!(url, "GET product metafields");
        let pages = self.transport.get(&url).await?;
        concat_array_field("product metafields", "metafields", page_bodies(&pages))
    }

    /// `POST products/{product_id}/metafields.json`, returning the new
    /// metafield's id, or `None` if the response was empty.
    ///
    /// # Errors
    ///
    /// [`AdminError::MissingField`] if a non-empty response has no integer
    /// `metafield.id`; otherwise transport and JSON failures.
    pub async fn create_product_metafield(
        &self,
        product_id: i64,
        payload: &Value,
    ) -> Result<Option<i64>, AdminError> {
        let url = self.resource_url(&["products", &product_id.to_string(), "metafields.json"]);
        let Some(body) = self.post_json("create product metafield", &url, payload).await? else {
            return Ok(None);
        };
        let metafield_id = body["metafield"]["id"]
            .as_i64()
            .ok_or_else(|| AdminError::MissingField {
                context: "create product metafield".to_owned(),
                field: "metafield.id".to_owned(),
            })?;
        tracing::info!(product_id, metafield_id, "created product metafield");
        Ok(Some(metafield_id))
    }

    /// `PUT metafields/{metafield_id}.json`. `true` iff the response carried
    /// content.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and malformed response bodies.
    pub async fn update_product_metafield(
        &self,
        metafield_id: i64,
        payload: &Value,
    ) -> Result<bool, AdminError> {
        let url = self.resource_url(&["metafields", &format!("{metafield_id}.json")]);
        let updated = self
            .put_json("update product metafield", &url, payload)
            .await?
            .is_some();
        if updated {
            tracing::info!(metafield_id, "updated product metafield");
        }
        Ok(updated)
    }
}
