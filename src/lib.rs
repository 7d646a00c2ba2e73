pub mod sdk;

pub use sdk::app::{Field, MapView, Planner, PlannerSettings, UiEvent};
pub use sdk::config::OrsConfig;
pub use sdk::routing::{
    resolve_address, Coordinate, RemoteOrsProvider, RouteResult, RouteSummary, RoutingError,
    RoutingProvider,
};
