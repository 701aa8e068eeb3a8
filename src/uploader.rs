use futures::future::{try_join_all, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::bridge::{self, InvokeError};
use crate::model::{DroppedFile, UploadedVideo};
use crate::settings::{Settings, UploaderKind};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    Transport(String),
    InvalidResponse(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Transport(msg) => write!(f, "upload transport failed: {}", msg),
            UploadError::InvalidResponse(msg) => write!(f, "invalid upload response: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

/// Turns one dropped file into an uploaded record.
pub trait Uploader {
    fn kind(&self) -> UploaderKind;

    fn submit(&self, file: DroppedFile) -> LocalBoxFuture<'static, Result<UploadedVideo, UploadError>>;
}

/// Starts every upload at once and waits for all of them. The first failure
/// fails the whole batch.
pub async fn upload_batch(
    uploader: &dyn Uploader,
    files: Vec<DroppedFile>,
) -> Result<Vec<UploadedVideo>, UploadError> {
    try_join_all(files.into_iter().map(|file| uploader.submit(file))).await
}

/// Pretends to upload: waits out a fixed latency, then always succeeds.
pub struct MockUploader {
    pub delay_ms: u32,
}

impl Uploader for MockUploader {
    fn kind(&self) -> UploaderKind {
        UploaderKind::Mock
    }

    fn submit(&self, file: DroppedFile) -> LocalBoxFuture<'static, Result<UploadedVideo, UploadError>> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(UploadedVideo::completed(&file))
        }
        .boxed_local()
    }
}

#[derive(Serialize)]
struct UploadVideoRequest {
    name: String,
    size: u64,
    mime_type: String,
}

#[derive(Serialize)]
struct UploadVideoInvokeArgs {
    request: UploadVideoRequest,
}

/// Hands the file's metadata to the desktop shell's `upload_video` command.
pub struct BackendUploader;

impl Uploader for BackendUploader {
    fn kind(&self) -> UploaderKind {
        UploaderKind::Backend
    }

    fn submit(&self, file: DroppedFile) -> LocalBoxFuture<'static, Result<UploadedVideo, UploadError>> {
        async move {
            let args = UploadVideoInvokeArgs {
                request: UploadVideoRequest {
                    name: file.name,
                    size: file.size,
                    mime_type: file.mime_type,
                },
            };
            bridge::invoke::<_, UploadedVideo>("upload_video", Some(&args))
                .await
                .map_err(|e| match e {
                    InvokeError::Rejected(msg) => UploadError::Transport(msg),
                    InvokeError::Decode(msg) => UploadError::InvalidResponse(msg),
                })
        }
        .boxed_local()
    }
}

pub fn uploader_for(settings: &Settings) -> Rc<dyn Uploader> {
    match settings.uploader {
        UploaderKind::Mock => Rc::new(MockUploader { delay_ms: settings.upload_delay_ms }),
        UploaderKind::Backend => Rc::new(BackendUploader),
    }
}
