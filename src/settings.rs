//! Player-facing settings, persisted to localStorage as one JSON blob.
//!
//! Both controllers read these through a shared `Rc<RefCell<Settings>>`
//! handle: the audio controller checks the flags on every play call, so a
//! toggle takes effect without re-registering anything.

use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "rr_settings";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sound_effects: bool,
    pub music: bool,
    pub music_volume: f64,
    pub sound_effects_volume: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_effects: true,
            music: true,
            music_volume: 1.0,
            sound_effects_volume: 1.0,
        }
    }
}

impl Settings {
    /// Loads the persisted settings, falling back to defaults when storage
    /// is unavailable or holds something unreadable.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return Self::default();
        };
        let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) else {
            return Self::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    pub fn save(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };
        if let Ok(raw) = serde_json::to_string(self) {
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }
}
