use super::Kind;
use super::Snapshot;
use super::Snapshots;
use crate::Probability;
use crate::area::Deformer;
use crate::config::Config;
use crate::geojson::Collection;
use crate::motion::Bus;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;

/// Write side of the feed. Owns all mutable simulation state.
///
/// Every tick moves the bus and republishes it. The area is republished
/// on a coin flip, which keeps its cadence irregular and its payload
/// churn low.
pub struct Feed {
    bus: Bus,
    area: Deformer,
    chance: Probability,
    rng: SmallRng,
    ticks: usize,
    refreshes: usize,
    bus_tx: watch::Sender<Arc<Snapshot>>,
    area_tx: watch::Sender<Arc<Snapshot>>,
}

impl Feed {
    /// Renders both generators once so readers never see an empty slot.
    pub fn new(
        bus: Bus,
        mut area: Deformer,
        chance: Probability,
        rng: SmallRng,
    ) -> anyhow::Result<(Self, Snapshots)> {
        let first_bus = Snapshot::try_from(bus.snapshot(crate::timestamp()))?;
        let first_area = Snapshot::try_from(area.snapshot(crate::timestamp()))?;
        let (bus_tx, bus_rx) = watch::channel(Arc::new(first_bus));
        let (area_tx, area_rx) = watch::channel(Arc::new(first_area));
        let feed = Self {
            bus,
            area,
            chance: chance.clamp(0., 1.),
            rng,
            ticks: 0,
            refreshes: 0,
            bus_tx,
            area_tx,
        };
        Ok((feed, Snapshots::new(bus_rx, area_rx)))
    }
    pub fn ticks(&self) -> usize {
        self.ticks
    }
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
    pub fn bus(&self) -> &Bus {
        &self.bus
    }
    pub fn area(&self) -> &Deformer {
        &self.area
    }
}

impl Feed {
    pub fn with_config(config: &Config) -> anyhow::Result<(Self, Snapshots)> {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::new(Bus::default(), Deformer::default(), config.area_chance, rng)
    }
}

impl Feed {
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.bus.advance();
        let bus = self.bus.snapshot(crate::timestamp());
        self.publish(Kind::Bus, bus);
        if self.rng.random_bool(self.chance) {
            self.refreshes += 1;
            let area = self.area.snapshot(crate::timestamp());
            self.publish(Kind::Area, area);
            log::trace!("[feed] area refreshed at phase {:.2}", self.area.phase());
        }
    }

    /// Ticks on a fixed period until `shutdown` fires or its sender drops.
    pub async fn run(mut self, period: Duration, mut shutdown: oneshot::Receiver<()>) -> Self {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut checkpoint = Instant::now();
        log::info!("[feed] ticking every {:?}", period);
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = interval.tick() => self.tick(),
            }
            if checkpoint.elapsed() >= crate::FEED_LOG_INTERVAL {
                checkpoint = Instant::now();
                log::info!(
                    "[feed] {:>10} ticks {:>10} area refreshes, bus {} at {}",
                    self.ticks,
                    self.refreshes,
                    self.bus.direction(),
                    self.bus.position()
                );
            }
        }
        log::info!("[feed] stopped after {} ticks", self.ticks);
        self
    }

    fn publish(&self, kind: Kind, collection: Collection) {
        let slot = match kind {
            Kind::Bus => &self.bus_tx,
            Kind::Area => &self.area_tx,
        };
        match Snapshot::try_from(collection) {
            Ok(snapshot) => std::mem::drop(slot.send_replace(Arc::new(snapshot))),
            Err(e) => log::error!("[feed] failed to serialize {} snapshot: {}", kind, e),
        }
    }
}
