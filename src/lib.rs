//! Rust client library for BenQ projector HTTP control daemons
//!
//! This library provides an async API for reading and controlling a BenQ
//! projector through the small HTTP daemon that fronts its serial port.
//! It supports:
//!
//! - Status polling (`/status`) into a typed, validated snapshot
//! - Power on/off, input source selection, volume, and mute commands
//! - A pure media-player projection of a snapshot (on/off, volume fraction,
//!   mute, source) for home-automation hosts to render
//!
//! Every operation is one bounded HTTP round trip; there is no retry and no
//! internal state. Hosts poll status on their own schedule and re-fetch
//! after a command to observe its effect.
//!
//! # Quick Start
//!
//! ```no_run
//! use benq_projector::{ControlRequest, ProjectorClient, ProjectorTarget};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let target = ProjectorTarget::new("192.168.1.50", 8084);
//!     let client = ProjectorClient::new(target)?;
//!
//!     // Read the current snapshot
//!     let status = client.status().await?;
//!     println!("{} is {}", status.model, status.display_state());
//!     if let Some(fraction) = status.volume_fraction() {
//!         println!("volume: {:.0}%", fraction * 100.0);
//!     }
//!
//!     // Issue a command, then refresh to observe its effect
//!     client
//!         .send(&status, &ControlRequest::SelectSource("HDMI".to_string()))
//!         .await?;
//!     let status = client.status().await?;
//!     println!("source: {:?}", status.current_source());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Client**: one HTTP round trip per status fetch or command
//! - **Status**: wire payload parsing and invariant validation
//! - **Command**: intent validation and wire path computation, no I/O
//! - **Projection**: pure snapshot-to-view mapping for media-player hosts
//! - **Types**: connection target and discovery handoff structures

mod client;
mod command;
mod error;
mod projection;
mod status;
mod types;

// Public exports
pub use client::{
    ProjectorClient, ProjectorClientBuilder, DEFAULT_COMMAND_TIMEOUT, DEFAULT_STATUS_TIMEOUT,
};
pub use command::ControlRequest;
pub use error::{ProjectorError, Result};
pub use projection::{available_sources, MediaPlayerState};
pub use status::{DeviceStatus, PowerState};
pub use types::{DiscoveredProjector, ProjectorTarget, AVAILABLE_SOURCES};
