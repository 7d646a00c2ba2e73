pub mod coord;
pub mod error;
pub mod geocode;
pub mod provider;
pub mod route;
pub mod service;

pub use coord::{Bounds, Coordinate};
pub use error::{ErrorKind, NetworkError, RoutingError, ValidationError};
pub use geocode::{resolve_address, AutocompleteQuery, Place, AUTOCOMPLETE_SIZE};
pub use provider::RemoteOrsProvider;
pub use route::{RouteResult, RouteSummary};
pub use service::RoutingProvider;
