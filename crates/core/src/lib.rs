//! Knowledge retrieval core

pub mod retriever;

pub use retriever::Retriever;
