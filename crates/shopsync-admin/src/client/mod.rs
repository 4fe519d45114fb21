//! Request formatter and dispatcher for the Admin REST API.
//!
//! Each operation joins fixed path segments and identifiers under the
//! configured admin API base URL, picks the HTTP verb, and hands the request
//! to [`HttpTransport`]. Results distinguish "the remote returned nothing"
//! (`Ok(None)`, `Ok(false)`, an empty `Vec`) from "the request failed" (`Err`).

mod inventory;
mod metafields;
mod products;
mod variants;

use serde_json::Value;
use shopsync_core::AppConfig;

use crate::cache::ProductCache;
use crate::error::AdminError;
use crate::payload::parse_body;
use crate::transport::{HttpTransport, Page};

/// Page size requested for the full product listing; the API caps it at 250.
pub const PRODUCTS_PAGE_LIMIT: u32 = 250;

pub struct AdminClient {
    transport: HttpTransport,
    base_url: String,
    location_id: Option<i64>,
    cache: ProductCache,
}

impl AdminClient {
    /// Builds a client from process configuration. The inventory location is
    /// taken from `config` as-is; use [`Self::connect`] to resolve a missing
    /// one from the shop.
    ///
    /// # Errors
    ///
    /// - [`AdminError::InvalidBaseUrl`] if `admin_api_url` is not an absolute URL.
    /// - [`AdminError::Initialization`] / [`AdminError::Http`] if the HTTP
    ///   client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AdminError> {
        let base_url = config.admin_api_url.trim_end_matches('/').to_owned();
        reqwest::Url::parse(&base_url).map_err(|e| AdminError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let transport = HttpTransport::new(
            &config.access_token,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_pages,
        )?;

        Ok(Self {
            transport,
            base_url,
            location_id: config.location_id,
            cache: ProductCache::from_config(config),
        })
    }

    /// Builds a client and, when `config` names no inventory location,
    /// resolves the shop's default location once.
    ///
    /// # Errors
    ///
    /// Everything [`Self::new`] returns, plus [`AdminError::NoLocation`] when
    /// the shop has no active location, or any error from the lookup itself.
    pub async fn connect(config: &AppConfig) -> Result<Self, AdminError> {
        let mut client = Self::new(config)?;
        if client.location_id.is_none() {
            let location = client
                .get_default_location()
                .await?
                .ok_or(AdminError::NoLocation)?;
            tracing::info!(location_id = location, "resolved default inventory location");
            client.location_id = Some(location);
        }
        Ok(client)
    }

    /// Replaces the listing cache, e.g. to point it at a scratch directory.
    #[must_use]
    pub fn with_cache(mut self, cache: ProductCache) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn location_id(&self) -> Option<i64> {
        self.location_id
    }

    #[must_use]
    pub fn cache(&self) -> &ProductCache {
        &self.cache
    }

    #[must_use]
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Joins `segments` under the base URL with `/`.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(segment);
        }
        url
    }

    async fn post_json(
        &self,
        context: &str,
        url: &str,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        tracing::debug!(url, "POST {context}");
        let page = self.transport.post(url, payload).await?;
        parse_page(context, &page)
    }

    async fn put_json(
        &self,
        context: &str,
        url: &str,
        payload: &Value,
    ) -> Result<Option<Value>, AdminError> {
        tracing::debug!(url, "PUT {context}");
        let page = self.transport.put(url, payload).await?;
        parse_page(context, &page)
    }

    async fn get_first_json(&self, context: &str, url: &str) -> Result<Option<Value>, AdminError> {
        tracing::debug!(url, "GET {context}");
        let page = self.transport.get_first(url).await?;
        parse_page(context, &page)
    }
}

fn parse_page(context: &str, page: &Page) -> Result<Option<Value>, AdminError> {
    parse_body(context, &page.body)
}

fn page_bodies(pages: &[Page]) -> impl Iterator<Item = &str> {
    pages.iter().map(|p| p.body.as_str())
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
