use serde::{Deserialize, Serialize};

use crate::client::ProjectorClient;
use crate::error::Result;

/// Input sources accepted by the projector, in the order hosts display them
pub const AVAILABLE_SOURCES: [&str; 3] = ["RGB", "HDMI", "HDMI2"];

/// Network address of a projector control daemon
///
/// The target is fixed for the lifetime of a configured device; changing the
/// address means reconfiguring the device with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectorTarget {
    pub host: String,
    pub port: u16,
}

impl ProjectorTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Base URL of the daemon's HTTP API
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl std::fmt::Display for ProjectorTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Projector handed over by a discovery flow
///
/// The daemon advertises itself via mDNS (`_benq_projector._tcp` with a TXT
/// `id` record); whatever performs that discovery fills in this struct once
/// per device. The library itself does not browse the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveredProjector {
    pub host: String,
    pub port: u16,
    /// Stable identifier advertised by the daemon (MAC-derived by default)
    pub unique_id: String,
    /// Human-readable name from the mDNS service
    pub name: String,
}

impl DiscoveredProjector {
    /// Build a client for this projector with default settings
    pub fn client(&self) -> Result<ProjectorClient> {
        ProjectorClient::new(ProjectorTarget::new(self.host.clone(), self.port))
    }

    pub fn target(&self) -> ProjectorTarget {
        ProjectorTarget::new(self.host.clone(), self.port)
    }
}
