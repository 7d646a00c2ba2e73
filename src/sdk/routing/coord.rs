use serde::Serialize;
use std::fmt;

/// A point on Earth in (latitude, longitude) order.
///
/// openrouteservice speaks `[lon, lat]`; conversion happens once, in
/// [`Coordinate::from_lon_lat`], so nothing past the parsing layer ever sees
/// the swapped order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Returns `None` for non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then_some(Self { lat, lon })
    }

    pub(crate) const fn from_raw(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from a service pair in `[lon, lat]` order.
    pub fn from_lon_lat(pair: [f64; 2]) -> Option<Self> {
        Self::new(pair[1], pair[0])
    }

    /// The `[lon, lat]` pair expected by the directions endpoint.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// Axis-aligned box around a set of coordinates, used to fit the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut south, mut north) = (first.lat, first.lat);
        let (mut west, mut east) = (first.lon, first.lon);
        for point in iter {
            south = south.min(point.lat);
            north = north.max(point.lat);
            west = west.min(point.lon);
            east = east.max(point.lon);
        }
        Some(Self {
            south_west: Coordinate::from_raw(south, west),
            north_east: Coordinate::from_raw(north, east),
        })
    }
}
