/// Presentation tuning values
///
/// Truncation length, stagger timing, transition duration and zoom defaults
/// are tuning knobs rather than algorithmic constants. They ship with the
/// defaults below and can be overridden per user through an optional JSON
/// file at `<config dir>/folio/tuning.json` — absent or unreadable files
/// silently keep the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tuning {
    /// Display strings truncate past this many characters.
    pub truncate_chars: usize,
    /// Per-card show delay when a filter is applied (ms).
    pub filter_stagger_ms: u64,
    /// Per-card show delay during the initial reveal (ms).
    pub reveal_stagger_ms: u64,
    /// Duration of the card fade transition (ms). Supplied externally — the
    /// reveal machine only needs to know when the fade is over.
    pub transition_ms: u64,
    /// The grid's transient "revealing" marker clears this long after a
    /// filter apply (ms).
    pub unstagger_cap_ms: u64,
    /// Initial-reveal settle time: min(cap, cards * stagger + floor).
    pub initial_settle_floor_ms: u64,
    pub initial_settle_cap_ms: u64,
    /// Scale applied when zoom is first toggled on.
    pub default_zoom: f32,
    /// Scale change per wheel line with the precision modifier held.
    pub wheel_zoom_step: f32,
    /// Announcements auto-clear after this long (ms).
    pub announce_clear_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            truncate_chars: 80,
            filter_stagger_ms: 60,
            reveal_stagger_ms: 80,
            transition_ms: 340,
            unstagger_cap_ms: 400,
            initial_settle_floor_ms: 150,
            initial_settle_cap_ms: 600,
            default_zoom: 1.8,
            wheel_zoom_step: 0.1,
            announce_clear_ms: 800,
        }
    }
}

impl Tuning {
    /// Settle delay for the initial staggered reveal of `cards` cards.
    pub fn initial_settle_ms(&self, cards: usize) -> u64 {
        (cards as u64 * self.reveal_stagger_ms + self.initial_settle_floor_ms)
            .min(self.initial_settle_cap_ms)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Path of the optional per-user override file.
pub fn override_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("folio");
    path.push("tuning.json");
    Some(path)
}

/// Load tuning: per-user overrides when present and valid, defaults
/// otherwise.
pub fn load() -> Tuning {
    let Some(path) = override_path() else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => match Tuning::from_json(&text) {
            Ok(tuning) => {
                println!("📁 Tuning overrides loaded from {}", path.display());
                tuning
            }
            Err(e) => {
                eprintln!("⚠️  Ignoring invalid tuning file {}: {}", path.display(), e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.truncate_chars, 80);
        assert_eq!(tuning.filter_stagger_ms, 60);
        assert_eq!(tuning.reveal_stagger_ms, 80);
        assert_eq!(tuning.default_zoom, 1.8);
        assert_eq!(tuning.announce_clear_ms, 800);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let tuning = Tuning::from_json(r#"{"truncate_chars": 120}"#).unwrap();
        assert_eq!(tuning.truncate_chars, 120);
        assert_eq!(tuning.filter_stagger_ms, 60);
    }

    #[test]
    fn test_initial_settle_is_capped() {
        let tuning = Tuning::default();
        assert_eq!(tuning.initial_settle_ms(2), 310);
        assert_eq!(tuning.initial_settle_ms(50), 600);
    }
}
