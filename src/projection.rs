//! Media-player view of a status snapshot
//!
//! Pure accessors with no I/O: a host re-evaluates them on every render
//! against the snapshot it owns. While the projector is off the daemon
//! reports no source, volume, or mute, so those accessors return `None`
//! rather than a default.

use crate::status::{DeviceStatus, PowerState};
use crate::types::AVAILABLE_SOURCES;

/// Display state of the media-player entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaPlayerState {
    On,
    Off,
}

impl std::fmt::Display for MediaPlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaPlayerState::On => write!(f, "on"),
            MediaPlayerState::Off => write!(f, "off"),
        }
    }
}

impl DeviceStatus {
    pub fn is_on(&self) -> bool {
        matches!(self.state, PowerState::On { .. })
    }

    pub fn display_state(&self) -> MediaPlayerState {
        if self.is_on() {
            MediaPlayerState::On
        } else {
            MediaPlayerState::Off
        }
    }

    /// Mute flag, unknown while the projector is off
    pub fn is_muted(&self) -> Option<bool> {
        match &self.state {
            PowerState::On { muted, .. } => Some(*muted),
            PowerState::Off => None,
        }
    }

    /// Volume as a fraction of `max_volume`, unknown while off
    ///
    /// Always within 0.0..=1.0 for a validated snapshot.
    pub fn volume_fraction(&self) -> Option<f64> {
        match &self.state {
            PowerState::On {
                volume, max_volume, ..
            } => Some(f64::from(*volume) / f64::from(*max_volume)),
            PowerState::Off => None,
        }
    }

    /// Active input source, unknown while off
    pub fn current_source(&self) -> Option<&str> {
        match &self.state {
            PowerState::On { source, .. } => Some(source),
            PowerState::Off => None,
        }
    }
}

/// Input sources the projector accepts, independent of device state
pub fn available_sources() -> &'static [&'static str] {
    &AVAILABLE_SOURCES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_on() -> DeviceStatus {
        DeviceStatus::parse(
            br#"{"model":"X700",
                "state":{"power":"on","muted":false,"volume":15,"max_volume":20,"source":"HDMI"}}"#,
        )
        .unwrap()
    }

    fn snapshot_off() -> DeviceStatus {
        DeviceStatus::parse(br#"{"model":"X700","state":{"power":"off"}}"#).unwrap()
    }

    #[test]
    fn powered_on_snapshot_projects_fully() {
        let status = snapshot_on();

        assert!(status.is_on());
        assert_eq!(status.display_state(), MediaPlayerState::On);
        assert_eq!(status.is_muted(), Some(false));
        assert_eq!(status.volume_fraction(), Some(0.75));
        assert_eq!(status.current_source(), Some("HDMI"));
    }

    #[test]
    fn powered_off_snapshot_projects_unknowns() {
        let status = snapshot_off();

        assert!(!status.is_on());
        assert_eq!(status.display_state(), MediaPlayerState::Off);
        assert_eq!(status.is_muted(), None);
        assert_eq!(status.volume_fraction(), None);
        assert_eq!(status.current_source(), None);
    }

    #[test]
    fn volume_fraction_stays_in_unit_range() {
        for (volume, max_volume) in [(0u32, 20u32), (1, 20), (20, 20), (7, 13)] {
            let body = format!(
                r#"{{"model":"X700","state":{{"power":"on","muted":true,
                    "volume":{},"max_volume":{},"source":"RGB"}}}}"#,
                volume, max_volume
            );
            let status = DeviceStatus::parse(body.as_bytes()).unwrap();
            let fraction = status.volume_fraction().unwrap();
            assert!((0.0..=1.0).contains(&fraction));
        }
    }

    #[test]
    fn source_list_is_independent_of_state() {
        assert_eq!(available_sources(), ["RGB", "HDMI", "HDMI2"]);
    }

    #[test]
    fn display_state_formats_lowercase() {
        assert_eq!(MediaPlayerState::On.to_string(), "on");
        assert_eq!(MediaPlayerState::Off.to_string(), "off");
    }
}
