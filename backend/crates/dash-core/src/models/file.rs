//! Uploaded files, stored inline as base64.
//!
//! The payload (`content_base64`) can be large, so list views use
//! [`FileSummary`] which leaves it out. Only description and tags can be
//! edited after upload.

use crate::{Record, RecordId};

use serde::{Deserialize, Serialize};

/// Full file record including its payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: RecordId,
    pub name: String,
    pub mime_type: String,
    /// Size in bytes as reported by the uploader
    pub size: u64,
    pub description: String,
    pub tags: Vec<String>,
    /// Upload date, `YYYY-MM-DD`
    pub uploaded: String,
    pub content_base64: String,
}

/// File metadata without the payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub id: RecordId,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub description: String,
    pub tags: Vec<String>,
    pub uploaded: String,
}

impl From<&FileRecord> for FileSummary {
    fn from(f: &FileRecord) -> Self {
        Self {
            id: f.id,
            name: f.name.clone(),
            mime_type: f.mime_type.clone(),
            size: f.size,
            description: f.description.clone(),
            tags: f.tags.clone(),
            uploaded: f.uploaded.clone(),
        }
    }
}

impl From<FileRecord> for FileSummary {
    fn from(f: FileRecord) -> Self {
        Self {
            id: f.id,
            name: f.name,
            mime_type: f.mime_type,
            size: f.size,
            description: f.description,
            tags: f.tags,
            uploaded: f.uploaded,
        }
    }
}

/// Upload payload
#[derive(Debug, Clone, Deserialize)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub uploaded: String,
    pub content_base64: String,
}

/// Metadata edit. Only description and tags are editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileUpdate {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Record for FileRecord {
    const ENTITY: &'static str = "File";

    type Draft = FileUpload;
    type Patch = FileUpdate;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: FileUpload) -> Self {
        Self {
            id,
            name: draft.name,
            mime_type: draft.mime_type,
            size: draft.size,
            description: draft.description,
            tags: draft.tags,
            uploaded: draft.uploaded,
            content_base64: draft.content_base64,
        }
    }

    fn apply_patch(&mut self, patch: FileUpdate) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}
