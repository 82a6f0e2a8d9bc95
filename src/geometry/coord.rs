use crate::Arbitrary;
use crate::Degrees;
use serde::Deserialize;
use serde::Serialize;
use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

/// A GeoJSON position: longitude, latitude and an optional altitude.
///
/// Doubles as a planar vector so interpolation and headings can be
/// written as plain arithmetic. Arithmetic works on the horizontal
/// components only; results carry no altitude. Serializes as
/// `[lon, lat]` or `[lon, lat, alt]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Degrees>", into = "Vec<Degrees>")]
pub struct Coord {
    lon: Degrees,
    lat: Degrees,
    alt: Option<f64>,
}

impl Coord {
    pub const fn new(lon: Degrees, lat: Degrees) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }
    pub const fn with_alt(self, alt: f64) -> Self {
        Self {
            alt: Some(alt),
            ..self
        }
    }
    pub const fn alt(&self) -> Option<f64> {
        self.alt
    }
    pub const fn lon(&self) -> Degrees {
        self.lon
    }
    pub const fn lat(&self) -> Degrees {
        self.lat
    }
    pub fn dot(&self, other: &Self) -> Degrees {
        self.lon * other.lon + self.lat * other.lat
    }
    pub fn norm(&self) -> Degrees {
        self.dot(self).sqrt()
    }
    /// Unit vector in the same direction.
    /// A zero-length vector has no direction and stays zero.
    pub fn unit(&self) -> Self {
        match self.norm() {
            n if n > 0. => Self::new(self.lon / n, self.lat / n),
            _ => Self::default(),
        }
    }
    /// Point a fraction `t` of the way from `self` to `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        *self + (*other - *self) * t
    }
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite() && self.alt.is_none_or(f64::is_finite)
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.lon + rhs.lon, self.lat + rhs.lat)
    }
}

impl Sub for Coord {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.lon - rhs.lon, self.lat - rhs.lat)
    }
}

impl Mul<f64> for Coord {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.lon * rhs, self.lat * rhs)
    }
}

impl Neg for Coord {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.lon, -self.lat)
    }
}

impl From<(Degrees, Degrees)> for Coord {
    fn from((lon, lat): (Degrees, Degrees)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Coord> for Vec<Degrees> {
    fn from(coord: Coord) -> Self {
        std::iter::once(coord.lon)
            .chain(std::iter::once(coord.lat))
            .chain(coord.alt)
            .collect()
    }
}

impl TryFrom<Vec<Degrees>> for Coord {
    type Error = String;
    fn try_from(position: Vec<Degrees>) -> Result<Self, Self::Error> {
        match position.as_slice() {
            [lon, lat] => Ok(Self::new(*lon, *lat)),
            [lon, lat, alt] => Ok(Self::new(*lon, *lat).with_alt(*alt)),
            _ => Err(format!(
                "position needs 2 or 3 elements, got {}",
                position.len()
            )),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.lon, self.lat)
    }
}

impl Arbitrary for Coord {
    fn random() -> Self {
        Self::new(
            rand::random_range(-180.0..180.0),
            rand::random_range(-90.0..90.0),
        )
    }
}
