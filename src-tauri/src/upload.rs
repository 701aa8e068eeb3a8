use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct UploadVideoRequest {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedVideo {
    pub id: String,
    pub name: String,
    pub uploaded_at: DateTime<Utc>,
    pub size: u64,
}

/// Stands in for a network upload: waits `delay`, then mints the record.
/// Nothing is transferred or stored.
pub async fn simulate_upload(request: UploadVideoRequest, delay: Duration) -> Result<UploadedVideo, String> {
    if !request.mime_type.starts_with("video/") {
        return Err(format!("{} is not a video ({})", request.name, request.mime_type));
    }

    tokio::time::sleep(delay).await;

    Ok(UploadedVideo {
        id: Uuid::new_v4().to_string(),
        name: request.name,
        uploaded_at: Utc::now(),
        size: request.size,
    })
}
