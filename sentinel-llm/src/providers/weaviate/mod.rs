//! Weaviate vector search provider

mod client;
mod retrieval;
pub mod types;

pub use client::WeaviateClient;
pub use retrieval::WeaviateRetrievalProvider;
