use roominfo_rpc::config::Config;
use roominfo_rpc::{logging, server};

#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config.log);

    tracing::info!(
        bind_address = %config.server.bind_address,
        service_name = %config.registry.service_name,
        "Starting room info server..."
    );
    server::start(config).await?;
    Ok(())
}
