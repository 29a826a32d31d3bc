use roominfo_rpc::config::Config;
use roominfo_rpc::logging;
use roominfo_rpc::services::client::{DEFAULT_ROOM, RoomInfoClientConfig, run_report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config.log);

    let mut rooms: Vec<String> = std::env::args().skip(1).collect();
    if rooms.is_empty() {
        rooms.push(DEFAULT_ROOM.to_string());
    }

    let client_config = RoomInfoClientConfig::from(&config);
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run_report(&client_config, &rooms, &mut stdout).await {
        tracing::error!(error = %e, "Room info call failed");
        eprintln!("Client error: {e}");
        std::process::exit(1);
    }
    Ok(())
}
