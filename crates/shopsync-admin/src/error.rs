use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("could not initialize client: {0}")]
    Initialization(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response for {context} is missing field `{field}`")]
    MissingField { context: String, field: String },

    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}: {body}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    #[error("pagination limit reached for {url}: exceeded {max_pages} pages")]
    PaginationLimit { url: String, max_pages: usize },

    #[error("invalid admin API base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("no inventory location configured and none could be resolved")]
    NoLocation,

    #[error("product cache error at {path}: {reason}")]
    Cache { path: String, reason: String },
}
