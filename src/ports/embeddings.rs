use thiserror::Error;

/// Embedding vector plus the token count the provider charged for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub token_count: usize,
}

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The provider rejected the request or failed internally.
    #[error("embedding provider error: {0}")]
    Provider(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Capability contract for vector-embedding generation.
pub trait EmbeddingPort: Send + Sync {
    /// Embed a single text.
    fn generate_embedding(&self, text: &str) -> Result<Embedding, EmbeddingError>;

    /// Embed a batch of texts, one result per input, in input order.
    fn generate_embeddings(&self, texts: &[String]) -> Result<Vec<Embedding>, EmbeddingError>;
}
