use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const VIDEO_MIME_PREFIX: &str = "video/";

/// A file handle read out of a drag-and-drop payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DroppedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self { name: name.into(), size, mime_type: mime_type.into() }
    }

    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with(VIDEO_MIME_PREFIX)
    }

    /// Reads the name, size and declared type off a browser `File`.
    pub fn from_web_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
        }
    }
}

/// One "uploaded" video. Never mutated after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UploadedVideo {
    pub id: String,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub size: u64,
}

impl UploadedVideo {
    /// Mints the record for `file` with a fresh id, stamped now.
    pub fn completed(file: &DroppedFile) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: file.name.clone(),
            uploaded_at: Utc::now(),
            size: file.size,
        }
    }
}

/// Collects every file in a drop event's `DataTransfer`.
pub fn files_from_drag_event(e: &web_sys::DragEvent) -> Vec<DroppedFile> {
    let Some(list) = e.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| DroppedFile::from_web_file(&file))
        .collect()
}
