//! Settings-gated audio playback over two name-keyed pools of audio
//! elements: short one-shot clips and looping music tracks.
//!
//! Playback never happens when the corresponding settings flag is off, and
//! never for a name that was not registered first; both conditions are
//! silent no-ops rather than errors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::HtmlAudioElement;

use crate::settings::Settings;

// These paths are used in the DOM, so they are relative to the project root.
pub const SOUND_PATH: &str = "assets/sound";
pub const MUSIC_PATH: &str = "assets/music";

// TODO the clip/track maps double as an asset pool; pull the bookkeeping
// into a shared pool type once a third consumer appears.
pub struct AudioController {
    settings: Rc<RefCell<Settings>>,
    clips: HashMap<String, HtmlAudioElement>,
    music_tracks: HashMap<String, HtmlAudioElement>,
    music_volume: f64,
    sound_effects_volume: f64,
}

impl AudioController {
    pub fn new(settings: Rc<RefCell<Settings>>) -> Self {
        let (music_volume, sound_effects_volume) = {
            let current = settings.borrow();
            (
                if current.music_volume > 0.0 {
                    current.music_volume
                } else {
                    1.0
                },
                if current.sound_effects_volume > 0.0 {
                    current.sound_effects_volume
                } else {
                    1.0
                },
            )
        };
        Self {
            settings,
            clips: HashMap::new(),
            music_tracks: HashMap::new(),
            music_volume,
            sound_effects_volume,
        }
    }

    /// Registers a sound-effect clip under `name`, replacing any previous
    /// clip with that name.
    pub fn add_clip(&mut self, name: &str, filename: &str) {
        self.clips.remove(name);
        let Ok(element) = HtmlAudioElement::new_with_src(&format!("{SOUND_PATH}/{filename}"))
        else {
            return;
        };
        element.set_volume(self.sound_effects_volume);
        self.clips.insert(name.to_string(), element);
    }

    pub fn remove_clip(&mut self, name: &str) {
        self.clips.remove(name);
    }

    /// Plays `name` if sound effects are enabled and the clip exists. The
    /// current sound-effect volume is re-applied on every play.
    pub fn play_clip(&self, name: &str) {
        if !self.settings.borrow().sound_effects {
            return;
        }
        if let Some(clip) = self.clips.get(name) {
            let _ = clip.play();
            clip.set_volume(self.sound_effects_volume);
        }
    }

    /// Registers a looping music track under `name`, replacing any previous
    /// track with that name.
    pub fn add_music(&mut self, name: &str, filename: &str) {
        self.music_tracks.remove(name);
        let Ok(element) = HtmlAudioElement::new_with_src(&format!("{MUSIC_PATH}/{filename}"))
        else {
            return;
        };
        element.set_volume(self.music_volume);
        element.set_loop(true);
        self.music_tracks.insert(name.to_string(), element);
    }

    pub fn remove_music(&mut self, name: &str) {
        self.music_tracks.remove(name);
    }

    /// Starts `name` if music is enabled and the track exists. Nothing stops
    /// a track that is already playing; callers keep at most one track
    /// running by convention.
    pub fn play_music(&self, name: &str) {
        if !self.settings.borrow().music {
            return;
        }
        if let Some(track) = self.music_tracks.get(name) {
            let _ = track.play();
        }
    }

    pub fn pause_music(&self, name: &str) {
        if let Some(track) = self.music_tracks.get(name) {
            let _ = track.pause();
        }
    }

    /// For music, the volume is adjusted on change of the setting: the new
    /// value is applied to every registered track at once. Non-positive
    /// values are ignored.
    pub fn set_music_volume(&mut self, volume: f64) {
        if !(volume > 0.0) {
            return;
        }
        self.music_volume = volume;
        for track in self.music_tracks.values() {
            track.set_volume(volume);
        }
    }

    /// For sound effects, the volume is applied when a clip is next played.
    /// Non-positive values are ignored.
    pub fn set_sound_effect_volume(&mut self, volume: f64) {
        if !(volume > 0.0) {
            return;
        }
        self.sound_effects_volume = volume;
    }
}
