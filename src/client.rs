use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::command::ControlRequest;
use crate::error::{ProjectorError, Result};
use crate::status::DeviceStatus;
use crate::types::ProjectorTarget;

/// Default timeout for `/status` fetches
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for control commands
///
/// Power transitions block the daemon's serial worker for up to a minute,
/// so commands get a far longer bound than reads.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(150);

/// Client for one projector control daemon
///
/// Every operation is a single short-lived HTTP round trip with a bounded
/// timeout; there is no retry, no cache, and no state shared between calls.
/// The host drives the cadence: periodic [`status`] fetches, and [`send`]
/// whenever a user or automation intent arrives. A command's effect is
/// observed by the next fetch, never reported back directly.
///
/// # Example
///
/// ```no_run
/// use benq_projector::{ControlRequest, ProjectorClient, ProjectorTarget};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ProjectorClient::new(ProjectorTarget::new("192.168.1.50", 8084))?;
///
///     let status = client.status().await?;
///     println!("{} is {}", status.model, status.display_state());
///
///     if status.is_on() {
///         client
///             .send(&status, &ControlRequest::SetVolumeFraction(0.5))
///             .await?;
///     }
///     Ok(())
/// }
/// ```
///
/// [`status`]: ProjectorClient::status
/// [`send`]: ProjectorClient::send
#[derive(Debug, Clone)]
pub struct ProjectorClient {
    http: Client,
    target: ProjectorTarget,
    status_timeout: Duration,
    command_timeout: Duration,
}

impl ProjectorClient {
    /// Create a client with default timeouts
    pub fn new(target: ProjectorTarget) -> Result<Self> {
        Self::builder(target).build()
    }

    /// Create a builder for configuring the client
    pub fn builder(target: ProjectorTarget) -> ProjectorClientBuilder {
        ProjectorClientBuilder::new(target)
    }

    /// The daemon address this client talks to
    pub fn target(&self) -> &ProjectorTarget {
        &self.target
    }

    /// Fetch a fresh status snapshot from the daemon
    ///
    /// One GET to `/status`. Network failures (connection refused, DNS,
    /// timeout) surface as [`ProjectorError::Unreachable`], a non-200
    /// response as [`ProjectorError::BadStatus`], and a malformed or
    /// invariant-violating body as [`ProjectorError::InvalidPayload`].
    pub async fn status(&self) -> Result<DeviceStatus> {
        let url = format!("{}/status", self.target.base_url());
        tracing::debug!("fetching {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(ProjectorError::Unreachable)?;

        let code = response.status();
        if code != StatusCode::OK {
            tracing::warn!("status fetch from {} returned {}", self.target, code);
            return Err(ProjectorError::BadStatus(code));
        }

        let body = response.bytes().await.map_err(ProjectorError::Unreachable)?;
        let status = DeviceStatus::parse(&body)?;

        tracing::debug!(
            "status: model={}, power={}",
            status.model,
            status.display_state()
        );
        Ok(status)
    }

    /// Issue one control command against the current snapshot
    ///
    /// The request is validated before any traffic; an invalid source or
    /// volume fraction never reaches the device. The POST is fire-and-forget
    /// beyond its HTTP status check: the snapshot is not mutated, and the
    /// caller confirms the effect by fetching status again.
    pub async fn send(&self, current: &DeviceStatus, request: &ControlRequest) -> Result<()> {
        let path = request.wire_path(current)?;
        let url = format!("{}{}", self.target.base_url(), path);
        tracing::debug!("sending {:?}: POST {}", request, url);

        let response = self
            .http
            .post(&url)
            .timeout(self.command_timeout)
            .send()
            .await
            .map_err(ProjectorError::Unreachable)?;

        let code = response.status();
        if !code.is_success() {
            tracing::warn!("projector rejected {:?} with {}", request, code);
            return Err(ProjectorError::DeviceRejected(code));
        }

        Ok(())
    }
}

/// Builder for configuring a [`ProjectorClient`]
#[derive(Debug)]
pub struct ProjectorClientBuilder {
    target: ProjectorTarget,
    http: Option<Client>,
    status_timeout: Duration,
    command_timeout: Duration,
}

impl ProjectorClientBuilder {
    fn new(target: ProjectorTarget) -> Self {
        Self {
            target,
            http: None,
            status_timeout: DEFAULT_STATUS_TIMEOUT,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Use a custom `reqwest::Client`, e.g. to share a connection pool
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Override the `/status` fetch timeout
    pub fn status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    /// Override the control command timeout
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ProjectorClient> {
        let http = match self.http {
            Some(client) => client,
            None => Client::builder().build()?,
        };

        Ok(ProjectorClient {
            http,
            target: self.target,
            status_timeout: self.status_timeout,
            command_timeout: self.command_timeout,
        })
    }
}
