use super::coord::Coordinate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance_m: f64,
    pub duration_s: f64,
}

impl RouteSummary {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_s / 3600.0
    }

    /// Kilometres with two decimals, rounding half up: 12345 m -> "12.35 km".
    pub fn distance_label(&self) -> String {
        let hundredths = (self.distance_m / 10.0).round() as i64;
        format!("{}.{:02} km", hundredths / 100, hundredths % 100)
    }

    /// Whole minutes, rounding half up: 1830 s -> "31 分".
    pub fn duration_label(&self) -> String {
        let minutes = (self.duration_s / 60.0).round() as i64;
        format!("{} 分", minutes)
    }
}

/// One successful directions call. Replaces the previous result wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub geometry: Vec<Coordinate>,
    pub summary: RouteSummary,
    pub instructions: Vec<String>,
}
