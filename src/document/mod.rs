pub mod document;
pub mod record;
pub mod status;
pub mod tags;

pub use crate::types::identifiers::{DocumentId, WorkspaceId};
pub use document::{ContentType, Document, DocumentError, FileMetadata, NewDocument};
pub use record::DocumentRecord;
pub use status::{ProcessingStatus, VerificationStatus};
pub use tags::Tag;
