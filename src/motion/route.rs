use crate::Cursor;
use crate::geometry::Coord;

/// Fixed, ordered waypoints. Always at least two, so every cursor
/// in `[0, len - 1)` falls on a real segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Route(Vec<Coord>);

impl Route {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn waypoints(&self) -> &[Coord] {
        &self.0
    }
    /// Largest cursor the route can represent.
    pub fn end(&self) -> Cursor {
        (self.len() - 1) as Cursor
    }
    /// Interpolated position at a fractional index.
    pub fn at(&self, cursor: Cursor) -> Coord {
        let cursor = cursor.clamp(0., self.end());
        let i = (cursor.floor() as usize).min(self.len() - 1);
        let j = (i + 1).min(self.len() - 1);
        self.0[i].lerp(&self.0[j], cursor - i as Cursor)
    }
    /// Segment leaving waypoint `i` toward its successor, wrapping past the end.
    pub fn ahead(&self, i: usize) -> Coord {
        let n = self.len();
        self.0[(i + 1) % n] - self.0[i % n]
    }
    /// Segment arriving at waypoint `i` from its predecessor, wrapping past the start.
    pub fn behind(&self, i: usize) -> Coord {
        let n = self.len();
        self.0[i % n] - self.0[(i % n + n - 1) % n]
    }
}

impl TryFrom<Vec<Coord>> for Route {
    type Error = anyhow::Error;
    fn try_from(waypoints: Vec<Coord>) -> Result<Self, Self::Error> {
        match waypoints.len() {
            n if n < 2 => Err(anyhow::anyhow!("route needs at least 2 waypoints, got {}", n)),
            _ => Ok(Self(waypoints)),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self(crate::ROAD.iter().copied().map(Coord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn line() -> Route {
        Route::try_from(vec![Coord::new(0., 0.), Coord::new(10., 0.)]).unwrap()
    }

    #[test]
    fn needs_two_waypoints() {
        assert!(Route::try_from(Vec::<Coord>::new()).is_err());
        assert!(Route::try_from(vec![Coord::random()]).is_err());
        assert!(Route::try_from(vec![Coord::random(), Coord::random()]).is_ok());
    }

    #[test]
    fn midpoint() {
        assert_eq!(line().at(0.5), Coord::new(5., 0.));
    }

    #[test]
    fn endpoints() {
        assert_eq!(line().at(0.), Coord::new(0., 0.));
        assert_eq!(line().at(1.), Coord::new(10., 0.));
    }

    #[test]
    fn out_of_range_cursor_is_clamped() {
        assert_eq!(line().at(-3.), Coord::new(0., 0.));
        assert_eq!(line().at(7.), Coord::new(10., 0.));
    }

    #[test]
    fn segments_wrap() {
        let route = Route::default();
        let last = route.len() - 1;
        assert_eq!(route.ahead(last), route.waypoints()[0] - route.waypoints()[last]);
        assert_eq!(route.behind(0), route.waypoints()[0] - route.waypoints()[last]);
        assert_eq!(route.behind(3), route.ahead(2));
    }

    #[test]
    fn default_is_the_road() {
        let route = Route::default();
        assert_eq!(route.len(), crate::ROAD.len());
        assert_eq!(route.waypoints()[0], Coord::new(77.1, 28.5));
        assert_eq!(route.waypoints()[15], Coord::new(77.4, 28.65));
    }
}
