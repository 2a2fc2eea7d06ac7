//! File value types exchanged between entities and upload handlers.

use bytes::Bytes;

/// Raw uploaded content staged on an entity property, waiting to be stored.
///
/// An entity holds a `PendingFile` in its upload slot between the moment the
/// host accepts the upload and the moment the lifecycle listener hands it to
/// the upload handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Filename as submitted by the client.
    pub original_name: String,
    /// Declared MIME type, if the client sent one. Handlers may sniff the
    /// content instead of trusting this.
    pub content_type: Option<String>,
    /// The file content.
    pub data: Bytes,
}

impl PendingFile {
    pub fn new(original_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        PendingFile {
            original_name: original_name.into(),
            content_type: None,
            data: data.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size of the staged content in bytes.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A derived attribute an upload handler writes back onto a companion
/// property after storing a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAttribute {
    /// Name the file was stored under.
    StoredName(String),
    /// Stored size in bytes.
    Size(u64),
    /// Resolved MIME type.
    ContentType(String),
    /// Filename as originally submitted.
    OriginalName(String),
    /// Pixel dimensions, for image content.
    Dimensions { width: u32, height: u32 },
}
