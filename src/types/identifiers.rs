use serde::{Deserialize, Serialize};

/// Identifier of a persisted document.
///
/// Assigned by the persistence layer. A freshly created document carries the
/// unassigned (empty) value until its first save.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    /// The empty id a document holds before the persistence layer assigns one.
    pub fn unassigned() -> Self {
        DocumentId(String::new())
    }

    pub fn is_assigned(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of the workspace owning a document.
///
/// Workspaces are tenant-scoped containers managed outside this core; the
/// entity only holds the reference.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        WorkspaceId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
