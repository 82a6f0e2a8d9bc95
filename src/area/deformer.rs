use crate::Degrees;
use crate::Phase;
use crate::geojson::Collection;
use crate::geojson::Feature;
use crate::geojson::Geometry;
use crate::geojson::Properties;
use crate::geometry::Coord;

/// A polygon wobbling around a fixed base ring.
///
/// Every vertex is displaced by a sine along longitude and a cosine along
/// latitude. The phase advances by a fixed step per derived ring, so the
/// n-th ring is a pure function of n.
#[derive(Debug, Clone)]
pub struct Deformer {
    base: Vec<Coord>,
    phase: Phase,
    step: Phase,
    amplitude: Degrees,
}

impl Deformer {
    pub fn new(base: Vec<Coord>, step: Phase, amplitude: Degrees) -> Self {
        Self {
            base,
            phase: 0.,
            step,
            amplitude,
        }
    }
    pub fn base(&self) -> &[Coord] {
        &self.base
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn amplitude(&self) -> Degrees {
        self.amplitude
    }
    fn closed(&self) -> bool {
        self.base.len() > 1 && self.base.first() == self.base.last()
    }
}

impl Deformer {
    fn perturb(&self, vertex: &Coord, phase: Phase) -> Coord {
        let dx = (phase * crate::AREA_RATE_X + vertex.lon() * crate::AREA_FREQUENCY).sin();
        let dy = (phase * crate::AREA_RATE_Y + vertex.lat() * crate::AREA_FREQUENCY).cos();
        *vertex + Coord::new(dx, dy) * self.amplitude
    }
    /// Ring at an arbitrary phase, without touching state.
    /// A closed base ring stays exactly closed.
    pub fn ring_at(&self, phase: Phase) -> Vec<Coord> {
        let mut ring = self
            .base
            .iter()
            .map(|v| self.perturb(v, phase))
            .collect::<Vec<Coord>>();
        if self.closed() {
            let first = ring[0];
            if let Some(last) = ring.last_mut() {
                *last = first;
            }
        }
        ring
    }
    pub fn derive(&mut self) -> Vec<Coord> {
        self.phase += self.step;
        self.ring_at(self.phase)
    }
    pub fn snapshot(&mut self, timestamp: String) -> Collection {
        Collection::from(vec![Feature::new(
            Properties::named("Changing Area", "An area that changes slightly over time")
                .stamped(timestamp),
            Geometry::Polygon(vec![self.derive()]),
        )])
    }
}

impl Default for Deformer {
    fn default() -> Self {
        Self::new(
            crate::AREA.iter().copied().map(Coord::from).collect(),
            crate::AREA_PHASE_STEP,
            crate::AREA_AMPLITUDE,
        )
    }
}
