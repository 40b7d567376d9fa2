use serde::{Deserialize, Serialize};

/// Whether a human reviewer has confirmed the document's authenticity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Verified,
    Unverified,
}

/// Lifecycle of asynchronous content ingestion (chunking, embedding),
/// tracked independently of verification.
///
/// `Completed` is terminal. `Failed` is not: processing can be restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}
