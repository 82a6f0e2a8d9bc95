//! Feed Server Binary
//!
//! Ticks the bus and area simulation and serves the latest
//! GeoJSON snapshots over HTTP until Ctrl+C.

use clap::Parser;
use geofeed::config::Config;
use geofeed::feed::Feed;
use geofeed::hosting::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    geofeed::log();
    let config = Config::parse().validate()?;
    let (feed, snapshots) = Feed::with_config(&config)?;
    let (stop, shutdown) = tokio::sync::oneshot::channel();
    let ticker = tokio::spawn(feed.run(config.interval(), shutdown));
    log::info!("bus  API: http://{}/api/bus", config.bind);
    log::info!("area API: http://{}/api/area", config.bind);
    let served = Server::run(&config, snapshots).await;
    let _ = stop.send(());
    ticker.await?;
    log::info!("feed server shut down");
    served?;
    Ok(())
}
