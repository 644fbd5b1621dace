//! Content gateway
//!
//! Read-only access to the headless content store. Every page asks for its
//! data through [`ContentSource`], which is implemented by the HTTP client,
//! by the memoizing wrapper in [`crate::cache`] and by test stubs.

pub mod assets;
pub mod client;
pub mod error;
pub mod queries;

pub use assets::ImageAssets;
pub use client::SanityClient;
pub use error::GatewayError;
pub use queries::Query;

use async_trait::async_trait;
use serde_json::Value;

/// Something that can answer a GROQ query with a JSON document
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run the query and return the `result` member of the answer
    async fn fetch(&self, query: &Query) -> Result<Value, GatewayError>;
}
