use super::Direction;
use super::Route;
use crate::Cursor;
use crate::geojson::Collection;
use crate::geojson::Feature;
use crate::geojson::Geometry;
use crate::geojson::Properties;
use crate::geometry::Coord;

/// A bus shuttling back and forth along a route.
///
/// The cursor is a fractional waypoint index. Each [`Bus::advance`] moves it
/// by `speed` in the current direction, turning around once it comes
/// within `margin` of either end. Turning short of the end keeps the bus
/// from sticking on the final waypoint.
#[derive(Debug, Clone)]
pub struct Bus {
    route: Route,
    cursor: Cursor,
    direction: Direction,
    speed: Cursor,
    margin: Cursor,
}

impl Bus {
    pub fn new(route: Route, speed: Cursor, margin: Cursor) -> Self {
        Self {
            route,
            cursor: 0.,
            direction: Direction::Forward,
            speed,
            margin,
        }
    }
    pub fn route(&self) -> &Route {
        &self.route
    }
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
    /// Cursor bounds the bus oscillates between.
    pub fn bounds(&self) -> (Cursor, Cursor) {
        (self.margin, self.route.end() - self.margin)
    }
    /// Teleport the bus, e.g. to resume from a known state.
    pub fn place(&mut self, cursor: Cursor, direction: Direction) {
        self.cursor = cursor.clamp(0., self.route.end());
        self.direction = direction;
    }
}

impl Bus {
    pub fn advance(&mut self) {
        let (lo, hi) = self.bounds();
        self.cursor += self.speed * self.direction.sign();
        if self.cursor >= hi {
            self.cursor = hi;
            self.direction = Direction::Backward;
        } else if self.cursor <= lo {
            self.cursor = lo;
            self.direction = Direction::Forward;
        }
    }
    pub fn position(&self) -> Coord {
        self.route.at(self.cursor)
    }
    /// Unit vector along the segment leaving the waypoint behind the cursor
    /// when going forward, or along the segment arriving at it when going
    /// backward. Both point up the route; indices wrap around its ends.
    /// Zero when that segment has no length.
    pub fn heading(&self) -> Coord {
        let i = self.cursor.clamp(0., self.route.end()).floor() as usize;
        match self.direction {
            Direction::Forward => self.route.ahead(i),
            Direction::Backward => self.route.behind(i),
        }
        .unit()
    }
    pub fn snapshot(&self, timestamp: String) -> Collection {
        let position = self.position();
        let pointer = position + self.heading() * crate::HEADING_LENGTH;
        Collection::from(vec![
            Feature::new(
                Properties::named("Road", "The road path"),
                Geometry::LineString(self.route.waypoints().to_vec()),
            ),
            Feature::new(
                Properties::named("Bus", "Moving bus").stamped(timestamp),
                Geometry::Point(position),
            ),
            Feature::new(
                Properties::named("Direction", "Bus direction"),
                Geometry::LineString(vec![position, pointer]),
            ),
        ])
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(Route::default(), crate::BUS_SPEED, crate::BUS_MARGIN)
    }
}
