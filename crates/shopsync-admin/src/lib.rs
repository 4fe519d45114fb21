pub mod cache;
pub mod client;
pub mod error;
pub mod pagination;
pub mod payload;
pub mod transport;

pub use cache::ProductCache;
pub use client::AdminClient;
pub use error::AdminError;
pub use pagination::extract_next_link;
pub use payload::merge_payloads;
pub use transport::{HttpTransport, Page};
