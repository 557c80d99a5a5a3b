//! Send a single control command and show the refreshed status.
//!
//! Usage: cargo run --example control -- <host> <port> <action> [value]
//!
//! Actions: on, off, source <RGB|HDMI|HDMI2>, volume <0.0..=1.0>, mute <on|off>

use benq_projector::{ControlRequest, ProjectorClient, ProjectorTarget};

fn parse_request(action: &str, value: Option<String>) -> Result<ControlRequest, String> {
    match (action, value) {
        ("on", None) => Ok(ControlRequest::PowerOn),
        ("off", None) => Ok(ControlRequest::PowerOff),
        ("source", Some(name)) => Ok(ControlRequest::SelectSource(name)),
        ("volume", Some(v)) => v
            .parse()
            .map(ControlRequest::SetVolumeFraction)
            .map_err(|e| format!("invalid volume fraction: {}", e)),
        ("mute", Some(v)) => match v.as_str() {
            "on" => Ok(ControlRequest::SetMute(true)),
            "off" => Ok(ControlRequest::SetMute(false)),
            other => Err(format!("invalid mute value: {}", other)),
        },
        (action, _) => Err(format!("unknown or incomplete action: {}", action)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (host, port, action) = match (args.next(), args.next(), args.next()) {
        (Some(host), Some(port), Some(action)) => (host, port.parse::<u16>()?, action),
        _ => {
            eprintln!("usage: control <host> <port> <action> [value]");
            std::process::exit(2);
        }
    };
    let request = parse_request(&action, args.next())?;

    let client = ProjectorClient::new(ProjectorTarget::new(host, port))?;
    let status = client.status().await?;
    client.send(&status, &request).await?;

    // The daemon applies commands asynchronously; re-fetch to observe.
    let status = client.status().await?;
    println!(
        "{}: power={} source={:?} volume={:?} muted={:?}",
        status.model,
        status.display_state(),
        status.current_source(),
        status.volume_fraction(),
        status.is_muted()
    );

    Ok(())
}
