use crate::Probability;
use clap::Parser;
use std::time::Duration;

/// Runtime settings for the feed server.
/// Every flag falls back to an environment variable, then a default.
#[derive(Debug, Clone, Parser)]
#[command(name = "feed", about = "Serve a moving bus and a deforming area as GeoJSON")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    pub bind: String,
    /// Milliseconds between feed ticks.
    #[arg(long, env = "TICK_MILLIS", default_value_t = crate::TICK_INTERVAL.as_millis() as u64)]
    pub interval: u64,
    /// Chance that a tick also refreshes the area.
    #[arg(long, env = "AREA_CHANCE", default_value_t = crate::AREA_REFRESH_CHANCE)]
    pub area_chance: Probability,
    /// Seed for the area refresh coin. Random when omitted.
    #[arg(long, env = "FEED_SEED")]
    pub seed: Option<u64>,
    /// HTTP worker threads.
    #[arg(long, env = "HTTP_WORKERS", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval)
    }
    pub fn validate(self) -> anyhow::Result<Self> {
        match self {
            Self { interval: 0, .. } => Err(anyhow::anyhow!("tick interval must be positive")),
            Self { workers: 0, .. } => Err(anyhow::anyhow!("need at least one HTTP worker")),
            ref c if !(0.0..=1.0).contains(&c.area_chance) => Err(anyhow::anyhow!(
                "area chance must lie in [0, 1], got {}",
                c.area_chance
            )),
            c => Ok(c),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            interval: crate::TICK_INTERVAL.as_millis() as u64,
            area_chance: crate::AREA_REFRESH_CHANCE,
            seed: None,
            workers: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default().validate().unwrap();
        assert_eq!(config.interval(), crate::TICK_INTERVAL);
        assert_eq!(config.area_chance, 0.3);
    }

    #[test]
    fn parses_flags() {
        let config = Config::try_parse_from([
            "feed",
            "--bind",
            "0.0.0.0:8080",
            "--interval",
            "25",
            "--area-chance",
            "1",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.interval(), Duration::from_millis(25));
        assert_eq!(config.area_chance, 1.);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn rejects_bad_values() {
        let zero = Config {
            interval: 0,
            ..Config::default()
        };
        let chance = Config {
            area_chance: 1.5,
            ..Config::default()
        };
        let workers = Config {
            workers: 0,
            ..Config::default()
        };
        assert!(zero.validate().is_err());
        assert!(chance.validate().is_err());
        assert!(workers.validate().is_err());
    }
}
