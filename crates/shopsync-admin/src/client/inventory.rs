//! Inventory levels at the process-wide location, and location lookup.

use serde_json::{json, Value};

use crate::error::AdminError;

use super::{parse_page, AdminClient};

impl AdminClient {
    /// `POST inventory_levels/adjust.json`, changing the available quantity
    /// of `inventory_item_id` by `delta` at the configured location.
    ///
    /// # Errors
    ///
    /// [`AdminError::NoLocation`] if the client has no location; otherwise
    /// transport failures and malformed response bodies.
    pub async fn adjust_inventory(
        &self,
        inventory_item_id: i64,
        delta: i64,
    ) -> Result<bool, AdminError> {
        let payload = json!({
            "location_id": self.require_location()?,
            "inventory_item_id": inventory_item_id,
            "available_adjustment": delta,
        });
        self.post_inventory("adjust.json", inventory_item_id, &payload)
            .await
    }

    /// `POST inventory_levels/set.json`, setting the available quantity of
    /// `inventory_item_id` to `available` at the configured location.
    ///
    /// # Errors
    ///
    /// [`AdminError::NoLocation`] if the client has no location; otherwise
    /// transport failures and malformed response bodies.
    pub async fn set_inventory(
        &self,
        inventory_item_id: i64,
        available: i64,
    ) -> Result<bool, AdminError> {
        let payload = json!({
            "location_id": self.require_location()?,
            "inventory_item_id": inventory_item_id,
            "available": available,
        });
        self.post_inventory("set.json", inventory_item_id, &payload)
            .await
    }

    /// `GET locations.json`, returning the id of the first location not
    /// marked inactive.
    ///
    /// # Errors
    ///
    /// Propagates transport and JSON failures.
    pub async fn get_default_location(&self) -> Result<Option<i64>, AdminError> {
        let url = self.resource_url(&["locations.json"]);
        let Some(body) = self.get_first_json("locations", &url).await? else {
            return Ok(None);
        };
        let location = body["locations"]
            .as_array()
            .into_iter()
            .flatten()
            .filter(|loc| loc["active"].as_bool() != Some(false))
            .find_map(|loc| loc["id"].as_i64());
        Ok(location)
    }

    async fn post_inventory(
        &self,
        action: &str,
        inventory_item_id: i64,
        payload: &Value,
    ) -> Result<bool, AdminError> {
        let url = self.resource_url(&["inventory_levels", action]);
        tracing::debug!(url, inventory_item_id, "POST inventory level");
        let page = self.transport.post(&url, payload).await?;
        let Some(level) = parse_page("inventory level", &page)? else {
            return Ok(false);
        };
        tracing::debug!(%level, "inventory level response");
        Ok(true)
    }

    fn require_location(&self) -> Result<i64, AdminError> {
        self.location_id.ok_or(AdminError::NoLocation)
    }
}
