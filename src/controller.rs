use crate::model::DroppedFile;
use crate::state::{select_videos, DropError, UploadAction};
use crate::uploader::{upload_batch, UploadError, Uploader};

pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload videos";

/// How a drop gesture settled.
#[derive(Debug, PartialEq)]
pub enum DropOutcome {
    /// A batch was already in flight; the drop was discarded.
    Ignored,
    Rejected(DropError),
    Uploaded { count: usize, skipped: usize },
    Failed(UploadError),
}

impl DropOutcome {
    /// Text for the blocking dialog, when the outcome needs one.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            DropOutcome::Rejected(e) => Some(e.to_string()),
            DropOutcome::Failed(_) => Some(UPLOAD_FAILED_MESSAGE.to_string()),
            DropOutcome::Ignored | DropOutcome::Uploaded { .. } => None,
        }
    }
}

/// Video files accepted from one drop, already marked as uploading.
#[derive(Debug, PartialEq)]
pub struct PendingBatch {
    pub videos: Vec<DroppedFile>,
    pub skipped: usize,
}

/// The synchronous half of a drop: clears the drag highlight, filters to
/// video files and flags the batch as started. A drop with no videos is
/// rejected even while another batch is in flight, so it always warns.
/// `uploading` is whether a batch was already running when the drop arrived.
pub fn begin_drop<D>(files: Vec<DroppedFile>, uploading: bool, dispatch: D) -> Result<PendingBatch, DropOutcome>
where
    D: Fn(UploadAction),
{
    dispatch(UploadAction::Dropped);

    let total = files.len();
    let videos = select_videos(files).map_err(DropOutcome::Rejected)?;
    if uploading {
        return Err(DropOutcome::Ignored);
    }
    let skipped = total - videos.len();

    dispatch(UploadAction::BatchStarted);
    Ok(PendingBatch { videos, skipped })
}

/// Uploads a started batch and merges the results in one step.
pub async fn finish_batch<D>(batch: PendingBatch, uploader: &dyn Uploader, dispatch: D) -> DropOutcome
where
    D: Fn(UploadAction),
{
    match upload_batch(uploader, batch.videos).await {
        Ok(done) => {
            let count = done.len();
            dispatch(UploadAction::BatchSucceeded(done));
            DropOutcome::Uploaded { count, skipped: batch.skipped }
        }
        Err(e) => {
            dispatch(UploadAction::BatchFailed);
            DropOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_file_size;
    use crate::state::UploadState;
    use crate::uploader::testing::InstantUploader;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::prelude::*;

    struct Harness {
        state: RefCell<Rc<UploadState>>,
    }

    impl Harness {
        fn new() -> Self {
            Self { state: RefCell::new(Rc::new(UploadState::default())) }
        }

        /// Drags `files` over the zone and drops them, running the batch to completion.
        fn drop_files(&self, uploader: &dyn Uploader, files: Vec<DroppedFile>) -> DropOutcome {
            self.apply(UploadAction::DragOver);
            let uploading = self.state.borrow().uploading;
            match begin_drop(files, uploading, |action| self.apply(action)) {
                Ok(batch) => block_on(finish_batch(batch, uploader, |action| self.apply(action))),
                Err(outcome) => outcome,
            }
        }

        fn apply(&self, action: UploadAction) {
            let current = self.state.borrow().clone();
            *self.state.borrow_mut() = current.reduce(action);
        }

        fn snapshot(&self) -> Rc<UploadState> {
            self.state.borrow().clone()
        }
    }

    #[test]
    fn single_clip_lands_in_the_list() {
        let h = Harness::new();
        let outcome = h.drop_files(
            &InstantUploader::default(),
            vec![DroppedFile::new("clip.mp4", 2_097_152, "video/mp4")],
        );
        assert_eq!(outcome, DropOutcome::Uploaded { count: 1, skipped: 0 });
        assert_eq!(outcome.alert_message(), None);

        let s = h.snapshot();
        assert_eq!(s.videos.len(), 1);
        assert_eq!(s.videos[0].name, "clip.mp4");
        assert_eq!(format_file_size(s.videos[0].size), "2 MB");
        assert!(!s.uploading);
        assert!(!s.drag_active);
    }

    #[test]
    fn non_video_entries_are_left_out() {
        let h = Harness::new();
        let uploader = InstantUploader::default();
        let outcome = h.drop_files(
            &uploader,
            vec![
                DroppedFile::new("a.mp4", 1, "video/mp4"),
                DroppedFile::new("readme.txt", 2, "text/plain"),
            ],
        );
        assert_eq!(outcome, DropOutcome::Uploaded { count: 1, skipped: 1 });
        assert_eq!(*uploader.seen.borrow(), ["a.mp4"]);
        let names: Vec<_> = h.snapshot().videos.iter().map(|v| v.name.clone()).collect();
        assert_eq!(names, ["a.mp4"]);
    }

    #[test]
    fn drop_without_videos_warns_and_changes_nothing() {
        let h = Harness::new();
        h.drop_files(&InstantUploader::default(), vec![DroppedFile::new("a.mp4", 1, "video/mp4")]);
        let before = h.snapshot().videos.clone();

        let uploader = InstantUploader::default();
        let outcome = h.drop_files(&uploader, vec![DroppedFile::new("a.png", 1, "image/png")]);
        assert_eq!(outcome, DropOutcome::Rejected(DropError::NoVideoFiles));
        assert_eq!(outcome.alert_message().as_deref(), Some("Please drop video files only"));
        assert!(uploader.seen.borrow().is_empty());

        let s = h.snapshot();
        assert_eq!(s.videos, before);
        assert!(!s.uploading);
        assert!(!s.drag_active);
    }

    #[test]
    fn failed_batch_alerts_and_clears_flags() {
        let h = Harness::new();
        h.drop_files(&InstantUploader::default(), vec![DroppedFile::new("a.mp4", 1, "video/mp4")]);
        let before = h.snapshot().videos.clone();

        let uploader = InstantUploader { fail_on: Some("bad.mp4"), ..Default::default() };
        let outcome = h.drop_files(
            &uploader,
            vec![
                DroppedFile::new("good.mp4", 1, "video/mp4"),
                DroppedFile::new("bad.mp4", 1, "video/mp4"),
            ],
        );
        assert!(matches!(outcome, DropOutcome::Failed(_)));
        assert_eq!(outcome.alert_message().as_deref(), Some(UPLOAD_FAILED_MESSAGE));

        let s = h.snapshot();
        assert_eq!(s.videos, before);
        assert!(!s.uploading);
        assert!(!s.drag_active);
    }

    #[test]
    fn sequential_batches_stay_sorted() {
        let h = Harness::new();
        let uploader = InstantUploader::default();
        h.drop_files(&uploader, vec![DroppedFile::new("first.mp4", 1, "video/mp4")]);
        h.drop_files(
            &uploader,
            vec![
                DroppedFile::new("second.mp4", 1, "video/mp4"),
                DroppedFile::new("third.mov", 1, "video/quicktime"),
            ],
        );

        let s = h.snapshot();
        assert_eq!(s.videos.len(), 3);
        assert!(s.videos.windows(2).all(|w| w[0].uploaded_at >= w[1].uploaded_at));
        assert_eq!(s.videos[2].name, "first.mp4");
    }

    #[test]
    fn drop_during_upload_is_ignored() {
        let h = Harness::new();
        h.apply(UploadAction::BatchStarted);
        let uploader = InstantUploader::default();
        let outcome = h.drop_files(&uploader, vec![DroppedFile::new("a.mp4", 1, "video/mp4")]);
        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(outcome.alert_message(), None);
        assert!(uploader.seen.borrow().is_empty());
        assert!(!h.snapshot().drag_active);
    }

    #[test]
    fn non_video_drop_during_upload_still_warns() {
        let h = Harness::new();
        h.apply(UploadAction::BatchStarted);
        let uploader = InstantUploader::default();
        let outcome = h.drop_files(&uploader, vec![DroppedFile::new("a.png", 1, "image/png")]);
        assert_eq!(outcome, DropOutcome::Rejected(DropError::NoVideoFiles));
        assert_eq!(outcome.alert_message().as_deref(), Some("Please drop video files only"));
        assert!(uploader.seen.borrow().is_empty());
        assert!(h.snapshot().uploading);
    }

    #[test]
    fn begin_drop_marks_uploading_before_any_await() {
        let h = Harness::new();
        let batch = begin_drop(
            vec![
                DroppedFile::new("a.mp4", 1, "video/mp4"),
                DroppedFile::new("b.txt", 1, "text/plain"),
            ],
            false,
            |action| h.apply(action),
        )
        .unwrap();
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.videos.len(), 1);
        assert!(h.snapshot().uploading);

        // a second drop arriving before the first settles is turned away
        let second = begin_drop(vec![DroppedFile::new("c.mp4", 1, "video/mp4")], true, |action| h.apply(action));
        assert_eq!(second, Err(DropOutcome::Ignored));

        let outcome = block_on(finish_batch(batch, &InstantUploader::default(), |action| h.apply(action)));
        assert_eq!(outcome, DropOutcome::Uploaded { count: 1, skipped: 1 });
        assert!(!h.snapshot().uploading);
        assert_eq!(h.snapshot().videos.len(), 1);
    }
}
