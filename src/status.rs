use serde::Deserialize;

use crate::error::{ProjectorError, Result};

/// Status snapshot reported by a projector control daemon
///
/// A snapshot is produced only by [`ProjectorClient::status`] and replaced
/// wholesale on every fetch; nothing mutates it in place. Commands never
/// touch it either, their effect shows up in the next fetch.
///
/// [`ProjectorClient::status`]: crate::ProjectorClient::status
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatus {
    /// Projector model name, used as the display name
    pub model: String,

    /// Stable identifier advertised by the daemon, when present
    #[serde(default)]
    pub unique_id: Option<String>,

    /// Power-tagged device state
    pub state: PowerState,
}

/// Device state, tagged by the `power` field of the wire payload
///
/// The daemon only reports source, volume, and mute while the lamp is on;
/// the off payload is just `{"power": "off"}`. The transient `invalid`
/// power value the daemon reports before its first serial poll is rejected
/// at parse time rather than surfaced.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "power", rename_all = "lowercase")]
pub enum PowerState {
    On {
        source: String,
        volume: u32,
        max_volume: u32,
        muted: bool,
    },
    Off,
}

impl DeviceStatus {
    /// Parse and validate a raw `/status` body
    pub(crate) fn parse(body: &[u8]) -> Result<Self> {
        let status: DeviceStatus =
            serde_json::from_slice(body).map_err(|e| ProjectorError::InvalidPayload(e.to_string()))?;
        status.validate()?;
        Ok(status)
    }

    fn validate(&self) -> Result<()> {
        if let PowerState::On {
            source,
            volume,
            max_volume,
            ..
        } = &self.state
        {
            if *max_volume == 0 {
                return Err(ProjectorError::InvalidPayload(
                    "max_volume must be positive".to_string(),
                ));
            }
            if volume > max_volume {
                return Err(ProjectorError::InvalidPayload(format!(
                    "volume {} exceeds max_volume {}",
                    volume, max_volume
                )));
            }
            if source.is_empty() {
                return Err(ProjectorError::InvalidPayload(
                    "source must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Volume ceiling while the projector is on
    pub fn max_volume(&self) -> Option<u32> {
        match &self.state {
            PowerState::On { max_volume, .. } => Some(*max_volume),
            PowerState::Off => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_powered_on_status() {
        let body = br#"{"model":"X700","unique_id":"aa:bb:cc:dd:ee:ff",
            "state":{"power":"on","muted":false,"volume":15,"max_volume":20,"source":"HDMI"}}"#;
        let status = DeviceStatus::parse(body).unwrap();

        assert_eq!(status.model, "X700");
        assert_eq!(status.unique_id.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        match status.state {
            PowerState::On {
                ref source,
                volume,
                max_volume,
                muted,
            } => {
                assert_eq!(source, "HDMI");
                assert_eq!(volume, 15);
                assert_eq!(max_volume, 20);
                assert!(!muted);
            }
            PowerState::Off => panic!("expected powered-on state"),
        }
    }

    #[test]
    fn parses_powered_off_status_without_state_fields() {
        let body = br#"{"model":"X700","state":{"power":"off"}}"#;
        let status = DeviceStatus::parse(body).unwrap();

        assert!(matches!(status.state, PowerState::Off));
        assert_eq!(status.unique_id, None);
        assert_eq!(status.max_volume(), None);
    }

    #[test]
    fn rejects_volume_above_max() {
        let body = br#"{"model":"X700",
            "state":{"power":"on","muted":false,"volume":25,"max_volume":20,"source":"HDMI"}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_zero_max_volume() {
        let body = br#"{"model":"X700",
            "state":{"power":"on","muted":false,"volume":0,"max_volume":0,"source":"HDMI"}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_empty_source() {
        let body = br#"{"model":"X700",
            "state":{"power":"on","muted":false,"volume":5,"max_volume":20,"source":""}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_unknown_power_value() {
        // The daemon reports "invalid" until its first serial poll completes.
        let body = br#"{"model":"X700","state":{"power":"invalid"}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_missing_state_fields() {
        let body = br#"{"model":"X700","state":{"power":"on","muted":false,"volume":5}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }

    #[test]
    fn rejects_negative_volume() {
        let body = br#"{"model":"X700",
            "state":{"power":"on","muted":false,"volume":-3,"max_volume":20,"source":"HDMI"}}"#;
        let err = DeviceStatus::parse(body).unwrap_err();
        assert!(matches!(err, ProjectorError::InvalidPayload(_)));
    }
}
