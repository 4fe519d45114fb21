//! The HTTP collaborator: authenticated `reqwest` calls against the Admin API.
//!
//! Every call returns raw [`Page`]s. Interpreting the bodies is left to
//! [`crate::client`]; this layer only maps transport failures and non-2xx
//! statuses into [`AdminError`] and drives `Link` header pagination.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, LINK};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::AdminError;
use crate::pagination::extract_next_link;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// One HTTP response body, plus the `Link` header needed to reach the next page.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub body: String,
    pub link: Option<String>,
}

impl Page {
    /// `true` when the body carries no bytes other than whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

pub struct HttpTransport {
    client: Client,
    max_pages: usize,
}

impl HttpTransport {
    /// Builds a transport that authenticates with `access_token` and follows at
    /// most `max_pages` pages per listing.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Initialization`] if the token is not a valid header
    /// value, or [`AdminError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_pages: usize,
    ) -> Result<Self, AdminError> {
        let mut headers = HeaderMap::with_capacity(2);
        let mut token =
            HeaderValue::from_str(access_token).map_err(|e| {
                AdminError::Initialization(format!("access token is not a valid header value: {e}"))
            })?;
        token.set_sensitive(true);
        headers.insert(ACCESS_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            max_pages: max_pages.max(1),
        })
    }

    /// GETs `url` and every page reachable through `rel="next"` links, in order.
    ///
    /// A blank follow-up page ends the walk, as does the absence of a next link.
    ///
    /// # Errors
    ///
    /// Propagates any request failure. Returns [`AdminError::PaginationLimit`]
    /// if more than `max_pages` pages would be fetched.
    pub async fn get(&self, url: &str) -> Result<Vec<Page>, AdminError> {
        let first = self.get_first(url).await?;
        let mut pages = vec![first];

        while let Some(last) = pages.last() {
            let Some(next) = self.fetch_next_page(last).await? else {
                break;
            };
            if pages.len() >= self.max_pages {
                return Err(AdminError::PaginationLimit {
                    url: url.to_owned(),
                    max_pages: self.max_pages,
                });
            }
            pages.push(next);
        }

        tracing::debug!(url, pages = pages.len(), "fetched paginated listing");
        Ok(pages)
    }

    /// GETs `url` without following pagination.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn get_first(&self, url: &str) -> Result<Page, AdminError> {
        self.send(Method::GET, url, None).await
    }

    /// POSTs `payload` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn post(&self, url: &str, payload: &Value) -> Result<Page, AdminError> {
        self.send(Method::POST, url, Some(payload)).await
    }

    /// PUTs `payload` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// See [`Self::send`].
    pub async fn put(&self, url: &str, payload: &Value) -> Result<Page, AdminError> {
        self.send(Method::PUT, url, Some(payload)).await
    }

    /// Follows the `rel="next"` link of `page`, if it has one.
    ///
    /// Returns `Ok(None)` when there is no next relation or the next page came
    /// back blank.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the follow-up GET.
    pub async fn fetch_next_page(&self, page: &Page) -> Result<Option<Page>, AdminError> {
        let Some(next_url) = page.link.as_deref().and_then(extract_next_link) else {
            return Ok(None);
        };
        tracing::debug!(url = %next_url, "following next page link");
        let next = self.get_first(&next_url).await?;
        Ok((!next.is_blank()).then_some(next))
    }

    /// # Errors
    ///
    /// - [`AdminError::Http`] — network, TLS or timeout failure.
    /// - [`AdminError::NotFound`] — HTTP 404.
    /// - [`AdminError::UnexpectedStatus`] — any other non-2xx status.
    async fn send(
        &self,
        method: Method,
        url: &str,
        payload: Option<&Value>,
    ) -> Result<Page, AdminError> {
        tracing::trace!(%method, url, "sending admin API request");
        let mut request = self.client.request(method, url);
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AdminError::NotFound {
                url: url.to_owned(),
            });
        }

        // Read the Link header before the body consumes the response.
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
                body,
            });
        }

        Ok(Page {
            url: url.to_owned(),
            body,
            link,
        })
    }
}
