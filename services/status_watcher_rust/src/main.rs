use anyhow::Result;
use dotenv::dotenv;
use log::info;
use status_watcher_rust::{Config, StatusWatcher};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting status_watcher_rust...");

    let config = Config::from_env()?;
    let mut watcher = StatusWatcher::new(config);

    watcher.run().await
}
