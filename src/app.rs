use yew::prelude::*;
use crate::components::sidebar::Sidebar;
use crate::pages;
use crate::settings::{self, Settings};

#[function_component(App)]
pub fn app() -> Html {
    let current_page = use_state(|| "upload".to_string());
    let settings = use_state(Settings::default);

    { // load once
        let settings = settings.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                settings.set(settings::load().await);
            });
            || ()
        });
    }

    let on_nav = {
        let current_page = current_page.clone();
        Callback::from(move |route: &'static str| {
            current_page.set(route.to_string());
        })
    };

    let on_settings_saved = {
        let settings = settings.clone();
        Callback::from(move |s: Settings| settings.set(s))
    };

    html! {
        <>
            <Sidebar on_navigate={on_nav} current_page={(*current_page).clone()} />
            <main class="container">
                // The upload page stays mounted so its list survives navigation.
                <div hidden={current_page.as_str() != "upload"}>
                    <pages::upload::UploadPage settings={(*settings).clone()} />
                </div>
                if current_page.as_str() == "settings" {
                    <pages::settings::SettingsPage settings={(*settings).clone()} on_saved={on_settings_saved} />
                }
            </main>
        </>
    }
}
