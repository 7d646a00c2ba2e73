//! Application orchestration layer
//!
//! Session state, autocomplete, route rendering and the planner that ties
//! them to a [`MapView`].

pub mod autocomplete;
pub mod controller;
pub mod renderer;
pub mod session;
pub mod view;

pub use autocomplete::{AutocompleteField, Completion, FieldState, QueryTicket};
pub use controller::{Planner, PlannerSettings, UiEvent};
pub use renderer::render_route;
pub use session::Session;
pub use view::{Field, LayerId, MapView, MarkerKind, FIT_PADDING_PX};
