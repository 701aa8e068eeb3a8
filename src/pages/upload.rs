use gloo::console;
use yew::prelude::*;

use crate::bridge;
use crate::components::{DropZone, VideoList};
use crate::controller::{begin_drop, finish_batch, DropOutcome};
use crate::model::files_from_drag_event;
use crate::settings::Settings;
use crate::state::{UploadAction, UploadState};
use crate::uploader::uploader_for;

#[derive(Properties, PartialEq)]
pub struct UploadPageProps {
    pub settings: Settings,
}

#[function_component(UploadPage)]
pub fn upload_page(props: &UploadPageProps) -> Html {
    let state = use_reducer(UploadState::default);
    let uploader = use_memo(props.settings.clone(), uploader_for);
    // set as soon as a batch starts, before the reducer state re-renders
    let in_flight = use_mut_ref(|| false);
    let debug_logs = props.settings.debug_logs;

    let on_drag_over = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            // keep the webview from opening the file
            e.prevent_default();
            state.dispatch(UploadAction::DragOver);
        })
    };

    let on_drag_leave = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            state.dispatch(UploadAction::DragLeave);
        })
    };

    let on_drop = {
        let state = state.clone();
        let uploader = uploader.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            let files = files_from_drag_event(&e);
            if debug_logs {
                console::log!(format!("Dropped {} file(s)", files.len()));
            }

            let dispatcher = state.dispatcher();
            let started = {
                let dispatcher = dispatcher.clone();
                begin_drop(files, *in_flight.borrow(), move |action| dispatcher.dispatch(action))
            };
            let batch = match started {
                Ok(batch) => batch,
                Err(outcome) => {
                    report(&outcome, debug_logs);
                    return;
                }
            };

            *in_flight.borrow_mut() = true;
            let in_flight = in_flight.clone();
            let uploader = (*uploader).clone();
            if debug_logs {
                console::log!(format!("Uploading {} video(s) via {:?}", batch.videos.len(), uploader.kind()));
            }

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = finish_batch(batch, uploader.as_ref(), move |action| {
                    dispatcher.dispatch(action)
                })
                .await;
                *in_flight.borrow_mut() = false;
                report(&outcome, debug_logs);
            });
        })
    };

    html! {
        <div class="container upload-page">
            <DropZone
                drag_active={state.drag_active}
                uploading={state.uploading}
                {on_drag_over}
                {on_drag_leave}
                {on_drop}
            />
            <VideoList videos={state.videos.clone()} />
        </div>
    }
}

fn report(outcome: &DropOutcome, debug_logs: bool) {
    match outcome {
        DropOutcome::Ignored => {
            console::warn!("Drop ignored: an upload is already in progress");
        }
        DropOutcome::Rejected(e) => {
            console::warn!(format!("Drop rejected: {e}"));
        }
        DropOutcome::Uploaded { count, skipped } => {
            if debug_logs {
                console::log!(format!("Uploaded {count} video(s), skipped {skipped} other file(s)"));
            }
        }
        DropOutcome::Failed(e) => {
            console::error!(format!("Upload failed: {e}"));
        }
    }

    if let Some(message) = outcome.alert_message() {
        bridge::alert(&message);
    }
}
