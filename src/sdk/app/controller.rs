//! Planner: event handling and submit orchestration
//!
//! The planner owns the provider, the view, the session and both
//! autocomplete fields. Front ends feed it [`UiEvent`]s; every failure is
//! turned into a view notification and the UI stays usable.

use super::autocomplete::{AutocompleteField, Completion, QueryTicket};
use super::renderer::render_route;
use super::session::Session;
use super::view::{Field, MapView};
use crate::sdk::config::{OrsConfig, DEFAULT_COUNTRY};
use crate::sdk::routing::geocode::{resolve_address, AutocompleteQuery, AUTOCOMPLETE_SIZE};
use crate::sdk::routing::{
    Coordinate, NetworkError, Place, RoutingError, RoutingProvider, ValidationError,
};

/// Tokyo Station.
pub const DEFAULT_CENTER: Coordinate = Coordinate::from_raw(35.6812, 139.7671);
pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    InputChanged { field: Field, text: String },
    SuggestionClicked { field: Field, index: usize },
    ClickedOutside { field: Field },
    EnterPressed(Field),
    SubmitClicked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    /// Country filter for suggestions.
    pub country: String,
    pub autocomplete_size: usize,
    pub initial_center: Coordinate,
    pub initial_zoom: u8,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            autocomplete_size: AUTOCOMPLETE_SIZE,
            initial_center: DEFAULT_CENTER,
            initial_zoom: DEFAULT_ZOOM,
        }
    }
}

impl From<&OrsConfig> for PlannerSettings {
    fn from(config: &OrsConfig) -> Self {
        Self {
            country: config.country.clone(),
            autocomplete_size: config.autocomplete_size,
            ..Self::default()
        }
    }
}

pub struct Planner<P, V> {
    provider: P,
    view: V,
    settings: PlannerSettings,
    session: Session,
    start: AutocompleteField,
    destination: AutocompleteField,
}

impl<P, V> Planner<P, V>
where
    P: RoutingProvider,
    V: MapView,
{
    /// Creates the planner and centres the view on the initial viewport.
    pub fn new(provider: P, mut view: V, settings: PlannerSettings) -> Self {
        view.set_viewport(settings.initial_center, settings.initial_zoom);
        Self {
            provider,
            view,
            settings,
            session: Session::new(),
            start: AutocompleteField::new(Field::Start),
            destination: AutocompleteField::new(Field::Destination),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn field(&self, field: Field) -> &AutocompleteField {
        match field {
            Field::Start => &self.start,
            Field::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut AutocompleteField {
        match field {
            Field::Start => &mut self.start,
            Field::Destination => &mut self.destination,
        }
    }

    pub fn handle(&mut self, event: UiEvent) {
        log::debug!("Handling {:?}", event);
        match event {
            UiEvent::InputChanged { field, text } => {
                if let Some((ticket, query)) = self.request_suggestions(field, &text) {
                    let result = self.provider.autocomplete(&query);
                    self.apply_suggestions(&ticket, result);
                }
            }
            UiEvent::SuggestionClicked { field, index } => self.select_suggestion(field, index),
            UiEvent::ClickedOutside { field } => {
                if self.field_mut(field).dismiss() {
                    self.view.hide_suggestions(field);
                }
            }
            UiEvent::EnterPressed(_) | UiEvent::SubmitClicked => {
                if let Err(e) = self.submit() {
                    log::warn!("Search failed: {}", e);
                }
            }
        }
    }

    /// Fills a field as if typed, without asking for suggestions.
    pub fn set_input(&mut self, field: Field, text: &str) {
        self.field_mut(field).set_text(text);
        self.view.hide_suggestions(field);
    }

    /// First half of a suggestion round trip: records the edit and returns
    /// the query to send, if any.
    ///
    /// Front ends that fetch asynchronously send the query themselves and
    /// pass the ticket back to [`Planner::apply_suggestions`] on arrival.
    /// The previous list no longer matches the text, so it is hidden until
    /// the new response lands.
    pub fn request_suggestions(
        &mut self,
        field: Field,
        text: &str,
    ) -> Option<(QueryTicket, AutocompleteQuery)> {
        let ticket = self.field_mut(field).input_changed(text);
        self.view.hide_suggestions(field);
        let ticket = ticket?;
        let query = AutocompleteQuery::new(
            ticket.text(),
            &self.settings.country,
            self.settings.autocomplete_size,
        );
        Some((ticket, query))
    }

    pub fn apply_suggestions(
        &mut self,
        ticket: &QueryTicket,
        result: Result<Vec<Place>, NetworkError>,
    ) {
        let field = ticket.field();
        match self.field_mut(field).complete(ticket, result) {
            Completion::Stale => {}
            Completion::Shown(labels) => self.view.show_suggestions(field, &labels),
            Completion::Empty => self.view.hide_suggestions(field),
            Completion::Failed(e) => {
                log::warn!("Suggestions for {} failed: {}", field, e);
                self.view.hide_suggestions(field);
                self.view.notify(&format!("候補取得エラー: {}", e));
            }
        }
    }

    fn select_suggestion(&mut self, field: Field, index: usize) {
        if let Some(place) = self.field_mut(field).select(index) {
            log::info!("Selected {} for {}: {}", place.label, field, place.coord);
            self.view.hide_suggestions(field);
            self.view.set_input_text(field, &place.label);
        }
    }

    /// Resolves both fields, replaces the markers and draws the route.
    ///
    /// Errors are reported to the view before being returned.
    pub fn submit(&mut self) -> Result<(), RoutingError> {
        let (start, destination) = match self.resolve_endpoints() {
            Ok(endpoints) => endpoints,
            Err(e) => {
                let message = match &e {
                    RoutingError::Validation(_) => e.to_string(),
                    _ => format!("ジオコーディングエラー: {}", e),
                };
                self.view.notify(&message);
                return Err(e);
            }
        };

        self.session.replace_markers(&mut self.view, start, destination);
        self.draw_route(Some(start), Some(destination))
    }

    fn resolve_endpoints(&self) -> Result<(Coordinate, Coordinate), RoutingError> {
        // Both fields are checked before any request goes out.
        for field in Field::ALL {
            let input = self.field(field);
            if input.cached().is_none() && input.text().trim().is_empty() {
                return Err(ValidationError::MissingField(field).into());
            }
        }

        let start = self.resolve_field(Field::Start)?;
        let destination = self.resolve_field(Field::Destination)?;
        Ok((start, destination))
    }

    fn resolve_field(&self, field: Field) -> Result<Coordinate, RoutingError> {
        let input = self.field(field);
        match input.cached() {
            Some(coord) => {
                log::debug!("Using selected suggestion for {}: {}", field, coord);
                Ok(coord)
            }
            None => resolve_address(&self.provider, input.text()),
        }
    }

    /// Draws the route between two points. A missing endpoint is a no-op.
    pub fn draw_route(
        &mut self,
        start: Option<Coordinate>,
        end: Option<Coordinate>,
    ) -> Result<(), RoutingError> {
        let (Some(start), Some(end)) = (start, end) else {
            log::debug!("Route needs both endpoints, skipping");
            return Ok(());
        };

        match render_route(&self.provider, &mut self.view, &mut self.session, start, end) {
            Ok(()) => Ok(()),
            Err(e) => {
                let e = RoutingError::from(e);
                self.view.notify(&format!("ルート取得エラー: {}", e));
                Err(e)
            }
        }
    }
}
