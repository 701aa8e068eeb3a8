use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    pub drag_active: bool,
    pub uploading: bool,
    /// Fired for both dragenter and dragover
    pub on_drag_over: Callback<DragEvent>,
    pub on_drag_leave: Callback<DragEvent>,
    pub on_drop: Callback<DragEvent>,
}

#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    let class = classes!(
        "drop-zone",
        props.drag_active.then_some("dragging"),
        props.uploading.then_some("uploading")
    );

    html! {
        <div
            {class}
            aria-disabled={props.uploading.to_string()}
            ondragenter={props.on_drag_over.clone()}
            ondragover={props.on_drag_over.clone()}
            ondragleave={props.on_drag_leave.clone()}
            ondrop={props.on_drop.clone()}
        >
            if props.uploading {
                <div class="drop-zone-status">
                    <div class="spinner"></div>
                    <p class="drop-zone-title">{"Uploading..."}</p>
                </div>
            } else {
                <>
                    <Icon icon_id={IconId::LucideFolderPlus} width={"64"} height={"64"} />
                    <p class="drop-zone-title">{"Drag and drop video files here"}</p>
                    <p class="form-hint">{"Supported formats: MP4, MOV, AVI, etc."}</p>
                </>
            }
        </div>
    }
}
