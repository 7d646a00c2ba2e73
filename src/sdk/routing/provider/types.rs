use crate::sdk::routing::coord::Coordinate;
use crate::sdk::routing::error::NetworkError;
use crate::sdk::routing::geocode::Place;
use crate::sdk::routing::route::{RouteResult, RouteSummary};
use serde::{Deserialize, Serialize};

// --- Data Structures for parsing ORS responses ---

#[derive(Deserialize)]
pub struct GeoResponse {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

#[derive(Deserialize)]
pub struct GeoFeature {
    pub geometry: PointGeometry,
    #[serde(default)]
    pub properties: GeoProperties,
}

#[derive(Deserialize)]
pub struct PointGeometry {
    pub coordinates: Vec<f64>,
}

#[derive(Deserialize, Default)]
pub struct GeoProperties {
    pub label: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub features: Vec<RouteFeature>,
}

#[derive(Deserialize)]
pub struct RouteFeature {
    pub properties: RouteProperties,
    pub geometry: LineGeometry,
}

#[derive(Deserialize)]
pub struct RouteProperties {
    pub summary: DirectionsSummary,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

// ORS leaves out zero-valued fields, e.g. for a route to the same point.
#[derive(Deserialize, Clone, Copy)]
pub struct DirectionsSummary {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub duration: f64,
}

#[derive(Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Deserialize)]
pub struct Step {
    pub instruction: String,
}

#[derive(Deserialize)]
pub struct LineGeometry {
    pub coordinates: Vec<Vec<f64>>,
}

/// Request body for the directions endpoint.
#[derive(Serialize)]
pub struct DirectionsRequest {
    pub coordinates: [[f64; 2]; 2],
}

impl DirectionsRequest {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            coordinates: [start.to_lon_lat(), end.to_lon_lat()],
        }
    }
}

fn coordinate(raw: &[f64]) -> Result<Coordinate, NetworkError> {
    // Extra trailing values (elevation) are ignored.
    match raw {
        [lon, lat, ..] => Coordinate::from_lon_lat([*lon, *lat]).ok_or_else(|| {
            NetworkError::Unexpected(format!("invalid coordinate [{}, {}]", lon, lat))
        }),
        _ => Err(NetworkError::Unexpected(format!(
            "coordinate needs 2 values, got {}",
            raw.len()
        ))),
    }
}

impl GeoResponse {
    pub fn into_places(self) -> Result<Vec<Place>, NetworkError> {
        self.features
            .into_iter()
            .map(|feature| {
                let coord = coordinate(&feature.geometry.coordinates)?;
                let label = feature
                    .properties
                    .label
                    .or(feature.properties.name)
                    .unwrap_or_else(|| coord.to_string());
                Ok(Place { label, coord })
            })
            .collect()
    }
}

impl DirectionsResponse {
    pub fn into_route(self) -> Result<RouteResult, NetworkError> {
        let feature = self.features.into_iter().next().ok_or_else(|| {
            NetworkError::Unexpected("no route found in success response".to_string())
        })?;

        let geometry = feature
            .geometry
            .coordinates
            .iter()
            .map(|c| coordinate(c))
            .collect::<Result<Vec<_>, _>>()?;

        let instructions = feature
            .properties
            .segments
            .into_iter()
            .flat_map(|segment| segment.steps)
            .map(|step| step.instruction)
            .collect();

        let summary = feature.properties.summary;
        Ok(RouteResult {
            geometry,
            summary: RouteSummary {
                distance_m: summary.distance,
                duration_s: summary.duration,
            },
            instructions,
        })
    }
}

pub fn parse_places(text: &str) -> Result<Vec<Place>, NetworkError> {
    serde_json::from_str::<GeoResponse>(text)?.into_places()
}

pub fn parse_route(text: &str) -> Result<RouteResult, NetworkError> {
    serde_json::from_str::<DirectionsResponse>(text)?.into_route()
}
