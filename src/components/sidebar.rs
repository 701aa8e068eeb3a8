use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    /// Callback when a nav item is clicked; argument is a simple route token
    pub on_navigate: Callback<&'static str>,
    pub current_page: String,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let nav = |route: &'static str| {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(route))
    };
    let class = |route: &str| classes!("nav-btn", (props.current_page == route).then_some("active"));

    html! {
        <aside class="sidebar">
            <button class={class("upload")} title="Upload" type="button" onclick={nav("upload")}>     <Icon icon_id={IconId::LucideHome}     width={"28"} height={"28"} /></button>
            <button class={class("settings")} title="Settings" type="button" onclick={nav("settings")}><Icon icon_id={IconId::LucideSettings} width={"28"} height={"28"} /></button>
        </aside>
    }
}
