//! Fetch and print a projector's current status.
//!
//! Usage: cargo run --example status -- <host> [port]

use benq_projector::{ProjectorClient, ProjectorTarget};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "127.0.0.1".to_string());
    let port: u16 = args.next().map(|p| p.parse()).transpose()?.unwrap_or(8084);

    let client = ProjectorClient::new(ProjectorTarget::new(host, port))?;
    let status = client.status().await?;

    println!("model:  {}", status.model);
    if let Some(id) = &status.unique_id {
        println!("id:     {}", id);
    }
    println!("power:  {}", status.display_state());
    if let Some(source) = status.current_source() {
        println!("source: {}", source);
    }
    if let Some(fraction) = status.volume_fraction() {
        println!("volume: {:.0}%", fraction * 100.0);
    }
    if let Some(muted) = status.is_muted() {
        println!("muted:  {}", muted);
    }

    Ok(())
}
