//! Display capabilities the planner needs from a front end.
//!
//! Anything that can draw markers, a route line and a few text regions can
//! host the planner: a browser map widget, a terminal, or a test recorder.

pub use crate::sdk::field::Field;
use crate::sdk::routing::{Bounds, Coordinate};

/// Margin kept around a route when fitting the viewport.
pub const FIT_PADDING_PX: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Default pin.
    Start,
    /// Red pin.
    Destination,
}

impl MarkerKind {
    pub fn popup(&self) -> &'static str {
        match self {
            MarkerKind::Start => "スタート地点",
            MarkerKind::Destination => "目的地",
        }
    }
}

/// Handle to something drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

pub trait MapView {
    fn set_viewport(&mut self, center: Coordinate, zoom: u8);

    fn add_marker(&mut self, kind: MarkerKind, at: Coordinate) -> LayerId;

    fn add_route(&mut self, geometry: &[Coordinate]) -> LayerId;

    fn remove_layer(&mut self, id: LayerId);

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32);

    fn show_summary(&mut self, distance: &str, duration: &str);

    /// Replaces the instruction list; one entry per step, in route order.
    fn show_instructions(&mut self, steps: &[String]);

    fn show_suggestions(&mut self, field: Field, labels: &[String]);

    fn hide_suggestions(&mut self, field: Field);

    fn set_input_text(&mut self, field: Field, text: &str);

    /// User-visible error notification.
    fn notify(&mut self, message: &str);
}
