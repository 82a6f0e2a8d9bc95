//! Synthetic GeoJSON feeds.
//!
//! A bus crawls back and forth along a fixed road while a polygon breathes
//! around its base shape. Both are rendered as GeoJSON FeatureCollections
//! and published to readers as immutable snapshots.
pub mod area;
pub mod geojson;
pub mod geometry;
pub mod motion;
pub mod sketch;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod feed;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Longitude and latitude components, in decimal degrees.
pub type Degrees = f64;
/// Fractional index along a route.
pub type Cursor = f64;
/// Monotonic driver of the area deformation.
pub type Phase = f64;
/// Likelihood of an event on a single tick.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ROAD
// A straight-ish road running northeast through south Delhi.
// ============================================================================
/// Waypoints of the road the bus drives along, as (longitude, latitude).
pub const ROAD: [(Degrees, Degrees); 16] = [
    (77.10, 28.50),
    (77.12, 28.51),
    (77.14, 28.52),
    (77.16, 28.53),
    (77.18, 28.54),
    (77.20, 28.55),
    (77.22, 28.56),
    (77.24, 28.57),
    (77.26, 28.58),
    (77.28, 28.59),
    (77.30, 28.60),
    (77.32, 28.61),
    (77.34, 28.62),
    (77.36, 28.63),
    (77.38, 28.64),
    (77.40, 28.65),
];

// ============================================================================
// BUS MOTION
// Cursor units are route segments, so speed is fraction-of-segment per tick.
// ============================================================================
/// Cursor increment per tick.
pub const BUS_SPEED: Cursor = 0.001;
/// Distance from either end of the route at which the bus turns around.
pub const BUS_MARGIN: Cursor = 0.1;
/// Length of the heading indicator drawn in front of the bus.
pub const HEADING_LENGTH: Degrees = 0.01;

// ============================================================================
// AREA DEFORMATION
// x' = x + sin(φ·Ωx + x·k)·A,  y' = y + cos(φ·Ωy + y·k)·A
// ============================================================================
/// Closed ring the area deforms around.
pub const AREA: [(Degrees, Degrees); 7] = [
    (77.20, 28.53),
    (77.25, 28.54),
    (77.30, 28.55),
    (77.32, 28.53),
    (77.30, 28.51),
    (77.25, 28.50),
    (77.20, 28.53),
];
/// Maximum displacement (A) of any vertex along either axis.
pub const AREA_AMPLITUDE: Degrees = 0.05;
/// Phase increment per derived polygon.
pub const AREA_PHASE_STEP: Phase = 0.01;
/// Phase rate (Ωx) of the longitude wobble.
pub const AREA_RATE_X: Phase = 0.1;
/// Phase rate (Ωy) of the latitude wobble.
pub const AREA_RATE_Y: Phase = 0.2;
/// Spatial frequency (k) so neighbouring vertices wobble out of step.
pub const AREA_FREQUENCY: Phase = 10.0;

// ============================================================================
// FEED SCHEDULING
// ============================================================================
/// Interval between ticks of the feed.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(10);
/// Chance that a tick also refreshes the area snapshot.
pub const AREA_REFRESH_CHANCE: Probability = 0.3;
/// Interval between tick-count log messages.
pub const FEED_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(any(feature = "server", feature = "client"))]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
