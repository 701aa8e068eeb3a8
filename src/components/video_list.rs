use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::format::{format_file_size, format_uploaded_at};
use crate::model::UploadedVideo;

pub const EMPTY_LIST_MESSAGE: &str = "No videos uploaded yet";

/// Display strings for one list row.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoRow {
    pub key: String,
    pub name: String,
    pub size_label: String,
    pub uploaded_label: String,
}

impl From<&UploadedVideo> for VideoRow {
    fn from(video: &UploadedVideo) -> Self {
        Self {
            key: video.id.clone(),
            name: video.name.clone(),
            size_label: format_file_size(video.size),
            uploaded_label: format_uploaded_at(&video.uploaded_at),
        }
    }
}

impl VideoRow {
    pub fn details(&self) -> String {
        format!("{} • {}", self.size_label, self.uploaded_label)
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<UploadedVideo>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    html! {
        <section class="video-list">
            <h2 class="video-list-header">{"Uploaded videos"}</h2>
            if props.videos.is_empty() {
                <div class="video-list-empty">{EMPTY_LIST_MESSAGE}</div>
            } else {
                <div class="video-list-rows">
                    {
                        props.videos.iter().map(VideoRow::from).map(|row| {
                            html! {
                                <div class="video-row" key={row.key.clone()}>
                                    <Icon icon_id={IconId::LucideFileVideo} width={"32"} height={"32"} />
                                    <div class="video-row-info">
                                        <p class="video-row-name">{&row.name}</p>
                                        <p class="video-row-details">{row.details()}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            }
        </section>
    }
}
