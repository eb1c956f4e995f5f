use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use super::game_surface::GameSurface;
use super::nav_bar::NavBar;
use super::settings_dialog::SettingsDialog;
use crate::audio::AudioController;
use crate::model::{Command, Direction, GameBoard, Location, Player};
use crate::settings::Settings;
use crate::ui::{CHOSEN_SLOTS, UiController, UiSurface};
use crate::util::{clog, random_array_element};

/// Dice rolled per turn.
const ROLLED_DICE: usize = 3;

/// Everything the event handlers need to drive a running game.
struct GameHandles {
    audio: AudioController,
    ui: UiController,
    board: GameBoard,
    player: Player,
    chosen: Vec<Command>,
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_mut_ref(Settings::load);
    let handles: Rc<RefCell<Option<GameHandles>>> = use_mut_ref(|| None);

    // Build both controllers against the surface rendered below. Runs once,
    // after the first render, when the elements exist.
    {
        let settings = settings.clone();
        let handles = handles.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let surface = UiSurface::from_document(&document)
                .expect("document is missing part of the game surface");
            let mut ui =
                UiController::new(surface).expect("failed to attach the ui controller");
            let mut audio = AudioController::new(settings.clone());

            audio.add_clip("dice", "dice-roll.wav");
            audio.add_clip("choose", "servo-click.wav");
            audio.add_music("main-theme", "main-theme.ogg");

            for command in Command::catalog() {
                let filename = format!("{}.png", command.name);
                if let Err(error) = ui.add_icon(&command.name, &filename) {
                    clog(&format!("failed to register icon {}: {error}", command.name));
                }
            }
            ui.add_dialog("settings", "settings-dialog");

            let board = GameBoard::sample();
            let player = Player {
                location: Location { row: 0, column: 0 },
                facing_direction: Direction::Down,
                sprite: "robot".to_string(),
                lifes: 3,
            };

            let start_game: Rc<dyn Fn()> = {
                let handles = handles.clone();
                Rc::new(move || {
                    let mut guard = handles.borrow_mut();
                    let Some(game) = guard.as_mut() else {
                        return;
                    };
                    if let Err(error) = game.ui.display_game_scene() {
                        clog(&format!("failed to enter the game scene: {error}"));
                        return;
                    }
                    if let Err(error) = game.ui.setup_new_map(&game.board, &game.player) {
                        clog(&format!("failed to set up the map: {error}"));
                        return;
                    }
                    game.audio.play_music("main-theme");
                })
            };
            if let Err(error) = ui.display_title_scene(start_game) {
                clog(&format!("failed to enter the title scene: {error}"));
            }

            *handles.borrow_mut() = Some(GameHandles {
                audio,
                ui,
                board,
                player,
                chosen: Vec::new(),
            });
            || ()
        });
    }

    let on_roll = {
        let handles = handles.clone();
        Callback::from(move |_| {
            let catalog = Command::catalog();
            let choose: Rc<dyn Fn(Command)> = {
                let handles = handles.clone();
                Rc::new(move |command: Command| {
                    let mut guard = handles.borrow_mut();
                    let Some(game) = guard.as_mut() else {
                        return;
                    };
                    if game.chosen.len() >= CHOSEN_SLOTS {
                        return;
                    }
                    game.chosen.push(command);
                    game.audio.play_clip("choose");
                    if let Err(error) = game.ui.update_chosen_dice_results(&game.chosen) {
                        clog(&format!("failed to update chosen commands: {error}"));
                    }
                })
            };

            let mut guard = handles.borrow_mut();
            let Some(game) = guard.as_mut() else {
                return;
            };
            game.chosen.clear();
            let commands: Vec<Command> = (0..ROLLED_DICE)
                .filter_map(|_| random_array_element(&catalog).cloned())
                .collect();
            game.audio.play_clip("dice");
            if let Err(error) = game.ui.show_dice_results(&commands, choose) {
                clog(&format!("failed to show dice results: {error}"));
            }
        })
    };

    let on_new_map = {
        let handles = handles.clone();
        Callback::from(move |_| {
            let mut guard = handles.borrow_mut();
            let Some(game) = guard.as_mut() else {
                return;
            };
            game.board = GameBoard::sample();
            game.player.location = Location { row: 0, column: 0 };
            game.chosen.clear();
            if let Err(error) = game.ui.setup_new_map(&game.board, &game.player) {
                clog(&format!("failed to set up the map: {error}"));
            }
        })
    };

    let on_settings = {
        let handles = handles.clone();
        Callback::from(move |_| {
            if let Some(game) = handles.borrow().as_ref() {
                game.ui.show_dialog("settings");
            }
        })
    };

    let on_toggle_sound = {
        let settings = settings.clone();
        Callback::from(move |enabled: bool| {
            settings.borrow_mut().sound_effects = enabled;
            settings.borrow().save();
        })
    };
    let on_toggle_music = {
        let settings = settings.clone();
        let handles = handles.clone();
        Callback::from(move |enabled: bool| {
            settings.borrow_mut().music = enabled;
            settings.borrow().save();
            let guard = handles.borrow();
            let Some(game) = guard.as_ref() else {
                return;
            };
            if enabled {
                game.audio.play_music("main-theme");
            } else {
                game.audio.pause_music("main-theme");
            }
        })
    };
    let on_music_volume = {
        let settings = settings.clone();
        let handles = handles.clone();
        Callback::from(move |volume: f64| {
            settings.borrow_mut().music_volume = volume;
            settings.borrow().save();
            if let Some(game) = handles.borrow_mut().as_mut() {
                game.audio.set_music_volume(volume);
            }
        })
    };
    let on_sound_effects_volume = {
        let settings = settings.clone();
        let handles = handles.clone();
        Callback::from(move |volume: f64| {
            settings.borrow_mut().sound_effects_volume = volume;
            settings.borrow().save();
            if let Some(game) = handles.borrow_mut().as_mut() {
                game.audio.set_sound_effect_volume(volume);
            }
        })
    };
    let on_close_settings = {
        let handles = handles.clone();
        Callback::from(move |_| {
            if let Some(game) = handles.borrow().as_ref() {
                game.ui.hide_dialog("settings");
            }
        })
    };

    let initial = *settings.borrow();
    html! {
        <>
            <NavBar on_roll={on_roll} on_new_map={on_new_map} on_settings={on_settings} />
            <GameSurface />
            <SettingsDialog
                sound_effects={initial.sound_effects}
                music={initial.music}
                music_volume={initial.music_volume}
                sound_effects_volume={initial.sound_effects_volume}
                on_toggle_sound={on_toggle_sound}
                on_toggle_music={on_toggle_music}
                on_music_volume={on_music_volume}
                on_sound_effects_volume={on_sound_effects_volume}
                on_close={on_close_settings}
            />
        </>
    }
}
