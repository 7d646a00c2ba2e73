use super::coord::Coordinate;
use super::error::NetworkError;
use super::geocode::{AutocompleteQuery, Place};
use super::route::RouteResult;

pub trait RoutingProvider: Send + Sync {
    /// One-shot address search. Results come back in service ranking order.
    fn geocode(&self, text: &str) -> Result<Vec<Place>, NetworkError>;

    /// Partial-text search used to populate the suggestion list.
    fn autocomplete(&self, query: &AutocompleteQuery) -> Result<Vec<Place>, NetworkError>;

    /// Driving directions from `start` to `end`.
    fn get_directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, NetworkError>;
}
