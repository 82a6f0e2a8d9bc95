use super::Kind;
use super::Snapshot;
use std::sync::Arc;
use tokio::sync::watch::Receiver;

/// Read side of the feed. Cheap to clone; one per HTTP worker is fine.
#[derive(Debug, Clone)]
pub struct Snapshots {
    bus: Receiver<Arc<Snapshot>>,
    area: Receiver<Arc<Snapshot>>,
}

impl Snapshots {
    pub fn new(bus: Receiver<Arc<Snapshot>>, area: Receiver<Arc<Snapshot>>) -> Self {
        Self { bus, area }
    }
    pub fn bus(&self) -> Arc<Snapshot> {
        self.get(Kind::Bus)
    }
    pub fn area(&self) -> Arc<Snapshot> {
        self.get(Kind::Area)
    }
    pub fn get(&self, kind: Kind) -> Arc<Snapshot> {
        match kind {
            Kind::Bus => self.bus.borrow().clone(),
            Kind::Area => self.area.borrow().clone(),
        }
    }
}
