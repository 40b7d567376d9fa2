//! Domain core for the Synjar multi-tenant document platform.
//!
//! `synjar-core` provides the Document lifecycle entity (verification and
//! processing state machines, tag mutation), tag normalization, email
//! hashing for privacy-preserving lookup keys, deployment-mode resolution,
//! and the outbound port contracts (embeddings, object storage) implemented
//! by external infrastructure.
//!
//! Every operation is synchronous and in-memory. Persistence, transport,
//! and retrieval live in the hosting services, not here.

pub mod deployment;
pub mod document;
pub mod identity;
pub mod ports;
pub mod types;
