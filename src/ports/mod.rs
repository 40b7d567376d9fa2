//! Outbound capability contracts consumed by the core.
//!
//! Concrete adapters (hosted embedding APIs, object stores) live in the
//! hosting services. The contracts are identified by capability, not by any
//! runtime registration token; retry and backoff policy belongs to the
//! adapter, nothing is retried at this boundary.

pub mod embeddings;
pub mod storage;

pub use embeddings::{Embedding, EmbeddingError, EmbeddingPort};
pub use storage::{StorageError, StoragePort, StoredObject};
