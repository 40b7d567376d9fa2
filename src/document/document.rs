use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::identifiers::{DocumentId, WorkspaceId};

use super::record::DocumentRecord;
use super::status::{ProcessingStatus, VerificationStatus};
use super::tags::Tag;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// Attempted lifecycle transition is not valid from the current state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// Malformed input to a field update.
    #[error("validation failed: {0}")]
    Validation(&'static str),
    /// The referenced tag does not exist on this document. Carries the
    /// caller's original input, not the normalized form.
    #[error("tag not found: {0}")]
    TagNotFound(String),
}

/// Kind of content a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Text,
    File,
}

/// Metadata of an uploaded file. Absent for freeform text documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub original_name: String,
    pub storage_url: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// Input to validated document creation.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub workspace_id: WorkspaceId,
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub file: Option<FileMetadata>,
    pub source: Option<String>,
    pub verification: VerificationStatus,
    pub tags: Vec<String>,
}

/// One piece of tenant content belonging to exactly one workspace.
///
/// Construction goes through exactly two entry points: [`Document::create`]
/// (validated, applies defaults) and [`Document::reconstitute`] (trusted,
/// verbatim from persisted state). Fields are private and mutation is
/// method-only so the lifecycle invariants hold.
///
/// The entity is not internally synchronized; concurrent mutation of one
/// instance must be serialized by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    workspace_id: WorkspaceId,
    title: String,
    content: String,
    content_type: ContentType,
    file: Option<FileMetadata>,
    source: Option<String>,
    verification: VerificationStatus,
    processing: ProcessingStatus,
    processing_error: Option<String>,
    tags: Vec<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a fresh document.
    ///
    /// Validates the title, normalizes the tag list (order-preserving, same
    /// mapping as [`set_tags`](Document::set_tags)), and defaults the
    /// processing lifecycle: `Pending`, no error, unassigned id. The
    /// persistence layer assigns the id on first save.
    pub fn create(input: NewDocument) -> Result<Self, DocumentError> {
        let title = valid_title(&input.title)?;
        let now = Utc::now();

        Ok(Document {
            id: DocumentId::unassigned(),
            workspace_id: input.workspace_id,
            title,
            content: input.content,
            content_type: input.content_type,
            file: input.file,
            source: input.source,
            verification: input.verification,
            processing: ProcessingStatus::Pending,
            processing_error: None,
            tags: input.tags.iter().map(|t| Tag::new(t)).collect(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a document from persisted state, verbatim.
    ///
    /// No defaulting, no validation: the record is trusted as written by a
    /// prior [`to_record`](Document::to_record).
    pub fn reconstitute(record: DocumentRecord) -> Self {
        Document {
            id: record.id,
            workspace_id: record.workspace_id,
            title: record.title,
            content: record.content,
            content_type: record.content_type,
            file: record.file,
            source: record.source,
            verification: record.verification,
            processing: record.processing,
            processing_error: record.processing_error,
            tags: record.tags,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Snapshot the current state for persistence.
    pub fn to_record(&self) -> DocumentRecord {
        DocumentRecord {
            id: self.id.clone(),
            workspace_id: self.workspace_id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            content_type: self.content_type,
            file: self.file.clone(),
            source: self.source.clone(),
            verification: self.verification,
            processing: self.processing,
            processing_error: self.processing_error.clone(),
            tags: self.tags.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn workspace_id(&self) -> &WorkspaceId {
        &self.workspace_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn file(&self) -> Option<&FileMetadata> {
        self.file.as_ref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn verification(&self) -> VerificationStatus {
        self.verification
    }

    pub fn processing(&self) -> ProcessingStatus {
        self.processing
    }

    pub fn processing_error(&self) -> Option<&str> {
        self.processing_error.as_deref()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Mark the document as verified by a human reviewer.
    pub fn verify(&mut self) -> Result<(), DocumentError> {
        if self.verification == VerificationStatus::Verified {
            return Err(DocumentError::InvalidState("document is already verified"));
        }
        self.verification = VerificationStatus::Verified;
        self.touch();
        Ok(())
    }

    /// Revoke a previous verification.
    pub fn unverify(&mut self) -> Result<(), DocumentError> {
        if self.verification == VerificationStatus::Unverified {
            return Err(DocumentError::InvalidState("document is not verified"));
        }
        self.verification = VerificationStatus::Unverified;
        self.touch();
        Ok(())
    }

    /// Enter `Processing`.
    ///
    /// Allowed from `Pending` and from `Failed` (the retry path); any
    /// previous processing error is cleared on entry. There is no transition
    /// back to `Pending`.
    pub fn start_processing(&mut self) -> Result<(), DocumentError> {
        match self.processing {
            ProcessingStatus::Processing => {
                return Err(DocumentError::InvalidState(
                    "document is already being processed",
                ));
            }
            ProcessingStatus::Completed => {
                return Err(DocumentError::InvalidState(
                    "document has already been processed",
                ));
            }
            ProcessingStatus::Pending | ProcessingStatus::Failed => {}
        }

        debug!(document = self.id.as_str(), from = ?self.processing, "processing started");
        self.processing = ProcessingStatus::Processing;
        self.processing_error = None;
        self.touch();
        Ok(())
    }

    /// Finish processing successfully. `Completed` is terminal.
    pub fn complete_processing(&mut self) -> Result<(), DocumentError> {
        if self.processing != ProcessingStatus::Processing {
            return Err(DocumentError::InvalidState(
                "document is not being processed",
            ));
        }
        self.processing = ProcessingStatus::Completed;
        self.touch();
        Ok(())
    }

    /// Record a processing failure. The document can re-enter `Processing`
    /// later via [`start_processing`](Document::start_processing).
    pub fn fail_processing(&mut self, message: impl Into<String>) -> Result<(), DocumentError> {
        if self.processing != ProcessingStatus::Processing {
            return Err(DocumentError::InvalidState(
                "document is not being processed",
            ));
        }
        let message = message.into();
        debug!(document = self.id.as_str(), error = %message, "processing failed");
        self.processing = ProcessingStatus::Failed;
        self.processing_error = Some(message);
        self.touch();
        Ok(())
    }

    /// Add a tag.
    ///
    /// Duplicate adds (post-normalization) are a silent no-op and do not
    /// refresh `updated_at`.
    pub fn add_tag(&mut self, raw: &str) {
        let tag = Tag::new(raw);
        if self.tags.contains(&tag) {
            return;
        }
        self.tags.push(tag);
        self.touch();
    }

    /// Remove a tag by its raw form.
    pub fn remove_tag(&mut self, raw: &str) -> Result<(), DocumentError> {
        let tag = Tag::new(raw);
        let idx = self
            .tags
            .iter()
            .position(|t| *t == tag)
            .ok_or_else(|| DocumentError::TagNotFound(raw.to_string()))?;
        self.tags.remove(idx);
        self.touch();
        Ok(())
    }

    /// Replace the whole tag list with the normalized mapping of `raws`,
    /// order-preserving and without deduplication (unlike
    /// [`add_tag`](Document::add_tag)).
    pub fn set_tags<I, S>(&mut self, raws: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = raws.into_iter().map(|t| Tag::new(t.as_ref())).collect();
        self.touch();
    }

    /// Set a new title. Empty or all-whitespace input is rejected; the
    /// stored value is trimmed.
    pub fn update_title(&mut self, raw: &str) -> Result<(), DocumentError> {
        self.title = valid_title(raw)?;
        self.touch();
        Ok(())
    }

    /// Replace the content unconditionally.
    pub fn update_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    /// Whether the owning persistence layer may delete this document right
    /// now. Deletion mid-processing is never safe.
    pub fn can_be_deleted(&self) -> bool {
        self.processing != ProcessingStatus::Processing
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn valid_title(raw: &str) -> Result<String, DocumentError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DocumentError::Validation("document title must not be empty"));
    }
    Ok(trimmed.to_string())
}
