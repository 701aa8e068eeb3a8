use std::fmt;
use std::rc::Rc;
use yew::prelude::*;

use crate::model::{DroppedFile, UploadedVideo};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub drag_active: bool,
    pub uploading: bool,
    pub videos: Vec<UploadedVideo>,
}

pub enum UploadAction {
    DragOver,
    DragLeave,
    Dropped,
    BatchStarted,
    BatchSucceeded(Vec<UploadedVideo>),
    BatchFailed,
}

impl Reducible for UploadState {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UploadAction::DragOver => {
                // no drag highlight while a batch is uploading
                if next.drag_active || next.uploading {
                    return self;
                }
                next.drag_active = true;
            }
            UploadAction::DragLeave | UploadAction::Dropped => {
                next.drag_active = false;
            }
            UploadAction::BatchStarted => {
                next.drag_active = false;
                next.uploading = true;
            }
            UploadAction::BatchSucceeded(batch) => {
                next.videos = merge_batch(&self.videos, batch);
                next.uploading = false;
            }
            UploadAction::BatchFailed => {
                next.uploading = false;
            }
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropError {
    NoVideoFiles,
}

impl fmt::Display for DropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropError::NoVideoFiles => write!(f, "Please drop video files only"),
        }
    }
}

impl std::error::Error for DropError {}

/// Keeps the `video/*` entries of a drop, or rejects the drop when there are none.
pub fn select_videos(files: Vec<DroppedFile>) -> Result<Vec<DroppedFile>, DropError> {
    let videos: Vec<DroppedFile> = files.into_iter().filter(DroppedFile::is_video).collect();
    if videos.is_empty() {
        Err(DropError::NoVideoFiles)
    } else {
        Ok(videos)
    }
}

/// New items go in front of the existing ones, then the whole list is sorted
/// newest first. The sort is stable, so equal timestamps keep that order.
pub fn merge_batch(existing: &[UploadedVideo], batch: Vec<UploadedVideo>) -> Vec<UploadedVideo> {
    let mut merged = batch;
    merged.extend_from_slice(existing);
    merged.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    merged
}
