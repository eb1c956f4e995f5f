use web_sys::{Event, HtmlInputElement, InputEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsDialogProps {
    pub sound_effects: bool,
    pub music: bool,
    pub music_volume: f64,
    pub sound_effects_volume: f64,
    pub on_toggle_sound: Callback<bool>,
    pub on_toggle_music: Callback<bool>,
    pub on_music_volume: Callback<f64>,
    pub on_sound_effects_volume: Callback<f64>,
    pub on_close: Callback<()>,
}

/// Native dialog for the audio settings. Opening and closing go through the
/// UI controller's dialog registry, so this component only renders markup
/// and forwards input changes.
#[function_component(SettingsDialog)]
pub fn settings_dialog(props: &SettingsDialogProps) -> Html {
    let toggle_sound = {
        let cb = props.on_toggle_sound.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    let toggle_music = {
        let cb = props.on_toggle_music.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    let music_volume = {
        let cb = props.on_music_volume.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value_as_number());
            }
        })
    };
    let effects_volume = {
        let cb = props.on_sound_effects_volume.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value_as_number());
            }
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <dialog id="settings-dialog">
            <h3 style="margin:0 0 12px 0;">{"Settings"}</h3>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.sound_effects} onchange={toggle_sound} />
                    <span>{"Sound effects"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.music} onchange={toggle_music} />
                    <span>{"Music"}</span>
                </label>
                <label style="display:flex; flex-direction:column; gap:4px;">
                    <span>{"Music volume"}</span>
                    <input type="range" min="0.1" max="1" step="0.1"
                        value={props.music_volume.to_string()} oninput={music_volume} />
                </label>
                <label style="display:flex; flex-direction:column; gap:4px;">
                    <span>{"Sound effects volume"}</span>
                    <input type="range" min="0.1" max="1" step="0.1"
                        value={props.sound_effects_volume.to_string()} oninput={effects_volume} />
                </label>
            </div>
            <button onclick={close_cb} style="margin-top:14px;">{"Done"}</button>
        </dialog>
    }
}
