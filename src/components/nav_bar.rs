use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub on_roll: Callback<()>,
    pub on_new_map: Callback<()>,
    pub on_settings: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let roll_cb = {
        let cb = props.on_roll.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let new_map_cb = {
        let cb = props.on_new_map.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <nav style="display:flex; align-items:center; gap:12px; padding:8px 16px;">
            <span style="font-weight:600; margin-right:auto;">{"Robot Race"}</span>
            <button onclick={roll_cb}>{"Roll Dice"}</button>
            <button onclick={new_map_cb}>{"New Map"}</button>
            <button onclick={settings_cb}>{"Settings"}</button>
        </nav>
    }
}
