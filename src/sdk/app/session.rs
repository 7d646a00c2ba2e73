//! Per-page session state
//!
//! Tracks what is currently drawn so every replacement removes the old layer
//! before adding the new one.

use super::view::{LayerId, MapView, MarkerKind};
use crate::sdk::routing::Coordinate;

/// Invariant: at most one start marker, one destination marker and one
/// route overlay are on the map at any time.
#[derive(Debug, Default)]
pub struct Session {
    start: Option<Coordinate>,
    destination: Option<Coordinate>,
    start_marker: Option<LayerId>,
    destination_marker: Option<LayerId>,
    route_layer: Option<LayerId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates of the last successfully placed markers.
    pub fn endpoints(&self) -> (Option<Coordinate>, Option<Coordinate>) {
        (self.start, self.destination)
    }

    pub fn replace_markers<V>(
        &mut self,
        view: &mut V,
        start: Coordinate,
        destination: Coordinate,
    ) where
        V: MapView + ?Sized,
    {
        if let Some(id) = self.start_marker.take() {
            view.remove_layer(id);
        }
        self.start_marker = Some(view.add_marker(MarkerKind::Start, start));
        self.start = Some(start);

        if let Some(id) = self.destination_marker.take() {
            view.remove_layer(id);
        }
        self.destination_marker = Some(view.add_marker(MarkerKind::Destination, destination));
        self.destination = Some(destination);
    }

    pub fn replace_route<V>(&mut self, view: &mut V, geometry: &[Coordinate])
    where
        V: MapView + ?Sized,
    {
        if let Some(id) = self.route_layer.take() {
            view.remove_layer(id);
        }
        self.route_layer = Some(view.add_route(geometry));
    }
}
