use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::settings::{self, Settings, UploaderKind};

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub settings: Settings,
    /// Called with the settings once they were saved.
    pub on_saved: Callback<Settings>,
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let draft = use_state(|| props.settings.clone());
    let status = use_state(|| Option::<Result<(), String>>::None);

    let on_delay_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<web_sys::HtmlInputElement>().value();
            if let Ok(ms) = v.trim().parse::<u32>() {
                let mut s = (*draft).clone();
                s.upload_delay_ms = ms;
                draft.set(s);
            }
        })
    };

    let on_uploader_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<web_sys::HtmlSelectElement>().value();
            let mut s = (*draft).clone();
            s.uploader = if v == "Backend" { UploaderKind::Backend } else { UploaderKind::Mock };
            draft.set(s);
        })
    };

    let on_debug_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<web_sys::HtmlInputElement>().checked();
            let mut s = (*draft).clone();
            s.debug_logs = v;
            draft.set(s);
        })
    };

    let on_save = {
        let draft = draft.clone();
        let status = status.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_| {
            let s = (*draft).clone();
            let status = status.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                match settings::save(&s).await {
                    Ok(()) => {
                        on_saved.emit(s);
                        status.set(Some(Ok(())));
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Failed to save settings: {e}"));
                        status.set(Some(Err(e)));
                    }
                }
            });
        })
    };

    html! {
        <main class="container">
            <h1>{"Settings"}</h1>
            <div class="settings-form">
                <div class="form-group row">
                    <label for="delay">{"Simulated upload delay (ms)"}</label>
                    <input id="delay" type="number" min="0" value={draft.upload_delay_ms.to_string()} oninput={on_delay_input} />
                </div>

                <div class="form-group row">
                    <label for="uploader">{"Uploader"}</label>
                    <select id="uploader" onchange={on_uploader_change}>
                        <option value="Mock" selected={draft.uploader == UploaderKind::Mock}>{"In-page mock"}</option>
                        <option value="Backend" selected={draft.uploader == UploaderKind::Backend}>{"Desktop backend"}</option>
                    </select>
                </div>

                <div class="form-group row">
                    <label for="dbg">{"Debug logs"}</label>
                    <input id="dbg" type="checkbox" checked={draft.debug_logs} onchange={on_debug_change} />
                </div>

                if let Some(Err(error)) = &*status {
                    <div class="alert alert-error">{error}</div>
                }
                if let Some(Ok(())) = &*status {
                    <div class="alert alert-success">{"Settings saved"}</div>
                }

                <div class="form-group center">
                    <button type="button" onclick={on_save}>{"Save"}</button>
                </div>
            </div>
        </main>
    }
}
