use crate::error::{ProjectorError, Result};
use crate::status::DeviceStatus;
use crate::types::AVAILABLE_SOURCES;

/// One user or automation intent against the projector
///
/// Requests are transient values: construct one per call, hand it to
/// [`ProjectorClient::send`], and discard it. There is no toggle logic
/// anywhere, so repeating a request produces the identical wire call.
///
/// [`ProjectorClient::send`]: crate::ProjectorClient::send
#[derive(Debug, Clone, PartialEq)]
pub enum ControlRequest {
    PowerOn,
    PowerOff,
    /// Switch to a named input; must be one of [`AVAILABLE_SOURCES`]
    SelectSource(String),
    /// Set volume as a fraction of the device's `max_volume`, 0.0..=1.0
    SetVolumeFraction(f64),
    SetMute(bool),
}

impl ControlRequest {
    /// Compute the POST path for this request against the given snapshot
    ///
    /// All validation happens here, before any network traffic: an invalid
    /// source or out-of-range fraction fails without touching the device.
    /// Volume levels are scaled with round-half-away-from-zero
    /// (`f64::round`), so a fraction read back from a status snapshot maps
    /// to the level it came from.
    pub fn wire_path(&self, current: &DeviceStatus) -> Result<String> {
        match self {
            ControlRequest::PowerOn => Ok("/power/on".to_string()),
            ControlRequest::PowerOff => Ok("/power/off".to_string()),
            ControlRequest::SelectSource(name) => {
                if !AVAILABLE_SOURCES.contains(&name.as_str()) {
                    return Err(ProjectorError::InvalidSource(name.clone()));
                }
                Ok(format!("/source/{}", name))
            }
            ControlRequest::SetVolumeFraction(fraction) => {
                if !(0.0..=1.0).contains(fraction) {
                    return Err(ProjectorError::InvalidVolumeFraction(*fraction));
                }
                let max_volume = current.max_volume().ok_or(ProjectorError::PoweredOff)?;
                let level = (fraction * f64::from(max_volume)).round() as u32;
                Ok(format!("/volume/{}", level))
            }
            ControlRequest::SetMute(mute) => {
                Ok(format!("/mute/{}", if *mute { "on" } else { "off" }))
            }
        }
    }
}
