#![allow(dead_code)]

use route_planner::sdk::app::{Field, LayerId, MapView, MarkerKind};
use route_planner::sdk::routing::{
    AutocompleteQuery, Bounds, Coordinate, NetworkError, Place, RouteResult, RouteSummary,
    RoutingProvider,
};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

pub fn place(label: &str, lat: f64, lon: f64) -> Place {
    Place {
        label: label.to_string(),
        coord: coord(lat, lon),
    }
}

pub fn route(distance_m: f64, duration_s: f64, steps: &[&str]) -> RouteResult {
    RouteResult {
        geometry: vec![
            coord(35.6812, 139.7671),
            coord(35.6900, 139.7300),
            coord(35.6896, 139.7006),
        ],
        summary: RouteSummary {
            distance_m,
            duration_s,
        },
        instructions: steps.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn status(code: u16) -> NetworkError {
    NetworkError::Status {
        status: code,
        message: "Internal Server Error".to_string(),
    }
}

/// In-memory provider with scripted answers and per-operation request counts.
#[derive(Default)]
pub struct FakeProvider {
    places: Mutex<HashMap<String, Vec<Place>>>,
    suggestions: Mutex<HashMap<String, Vec<Place>>>,
    routes: Mutex<VecDeque<Result<RouteResult, NetworkError>>>,
    pub geocode_calls: Mutex<Vec<String>>,
    pub autocomplete_calls: Mutex<Vec<AutocompleteQuery>>,
    pub directions_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(self, text: &str, places: Vec<Place>) -> Self {
        self.places.lock().unwrap().insert(text.to_string(), places);
        self
    }

    pub fn with_suggestions(self, text: &str, places: Vec<Place>) -> Self {
        self.suggestions.lock().unwrap().insert(text.to_string(), places);
        self
    }

    pub fn push_route(&self, result: Result<RouteResult, NetworkError>) {
        self.routes.lock().unwrap().push_back(result);
    }

    pub fn geocode_count(&self) -> usize {
        self.geocode_calls.lock().unwrap().len()
    }

    pub fn autocomplete_count(&self) -> usize {
        self.autocomplete_calls.lock().unwrap().len()
    }

    pub fn directions_count(&self) -> usize {
        self.directions_calls.load(Ordering::SeqCst)
    }

    pub fn request_count(&self) -> usize {
        self.geocode_count() + self.autocomplete_count() + self.directions_count()
    }
}

impl RoutingProvider for FakeProvider {
    fn geocode(&self, text: &str) -> Result<Vec<Place>, NetworkError> {
        self.geocode_calls.lock().unwrap().push(text.to_string());
        Ok(self.places.lock().unwrap().get(text).cloned().unwrap_or_default())
    }

    fn autocomplete(&self, query: &AutocompleteQuery) -> Result<Vec<Place>, NetworkError> {
        self.autocomplete_calls.lock().unwrap().push(query.clone());
        match self.suggestions.lock().unwrap().get(&query.text) {
            Some(places) => Ok(places.clone()),
            None => Err(status(503)),
        }
    }

    fn get_directions(
        &self,
        _start: Coordinate,
        _end: Coordinate,
    ) -> Result<RouteResult, NetworkError> {
        self.directions_calls.fetch_add(1, Ordering::SeqCst);
        self.routes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(NetworkError::Unexpected("no scripted route".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Marker(MarkerKind, Coordinate),
    Route(Vec<Coordinate>),
}

/// Keeps what a real map page would be showing.
#[derive(Default)]
pub struct RecordingView {
    next_id: u64,
    pub layers: BTreeMap<LayerId, Layer>,
    pub viewport: Option<(Coordinate, u8)>,
    pub fitted: Vec<(Bounds, u32)>,
    pub summary: Option<(String, String)>,
    pub instructions: Vec<String>,
    pub suggestions: HashMap<Field, Vec<String>>,
    pub inputs: HashMap<Field, String>,
    pub notifications: Vec<String>,
}

impl RecordingView {
    pub fn markers(&self, kind: MarkerKind) -> Vec<Coordinate> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                Layer::Marker(k, at) if *k == kind => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn routes(&self) -> usize {
        self.layers
            .values()
            .filter(|layer| matches!(layer, Layer::Route(_)))
            .count()
    }

    fn insert(&mut self, layer: Layer) -> LayerId {
        self.next_id += 1;
        let id = LayerId(self.next_id);
        self.layers.insert(id, layer);
        id
    }
}

impl MapView for RecordingView {
    fn set_viewport(&mut self, center: Coordinate, zoom: u8) {
        self.viewport = Some((center, zoom));
    }

    fn add_marker(&mut self, kind: MarkerKind, at: Coordinate) -> LayerId {
        self.insert(Layer::Marker(kind, at))
    }

    fn add_route(&mut self, geometry: &[Coordinate]) -> LayerId {
        self.insert(Layer::Route(geometry.to_vec()))
    }

    fn remove_layer(&mut self, id: LayerId) {
        assert!(self.layers.remove(&id).is_some(), "removed unknown layer {:?}", id);
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32) {
        self.fitted.push((bounds, padding_px));
    }

    fn show_summary(&mut self, distance: &str, duration: &str) {
        self.summary = Some((distance.to_string(), duration.to_string()));
    }

    fn show_instructions(&mut self, steps: &[String]) {
        self.instructions = steps.to_vec();
    }

    fn show_suggestions(&mut self, field: Field, labels: &[String]) {
        self.suggestions.insert(field, labels.to_vec());
    }

    fn hide_suggestions(&mut self, field: Field) {
        self.suggestions.remove(&field);
    }

    fn set_input_text(&mut self, field: Field, text: &str) {
        self.inputs.insert(field, text.to_string());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
