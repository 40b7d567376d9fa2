use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{DocumentId, WorkspaceId};

use super::document::{ContentType, FileMetadata};
use super::status::{ProcessingStatus, VerificationStatus};
use super::tags::Tag;

/// Persisted shape of a document.
///
/// This is what the persistence layer stores and hands back. It round-trips
/// verbatim through [`Document::to_record`](super::Document::to_record) and
/// [`Document::reconstitute`](super::Document::reconstitute); no field is
/// defaulted, validated, or re-normalized on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub workspace_id: WorkspaceId,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub file: Option<FileMetadata>,
    pub source: Option<String>,
    pub verification: VerificationStatus,
    pub processing: ProcessingStatus,
    pub processing_error: Option<String>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
