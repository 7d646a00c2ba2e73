//! Per-field autocomplete state machine
//!
//! Each input owns one [`AutocompleteField`]. Text changes issue numbered
//! query tickets; only the response to the newest ticket is applied.

use super::view::Field;
use crate::sdk::routing::{Coordinate, NetworkError, Place};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Empty text, or the list was dismissed.
    #[default]
    Idle,
    /// A suggestion query is in flight.
    Querying,
    /// Suggestions are on screen.
    ShowingList,
    /// The user picked a suggestion; its coordinate is cached.
    Selected,
}

/// Identifies one suggestion query. Responses carrying an outdated ticket
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    field: Field,
    seq: u64,
    text: String,
}

impl QueryTicket {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug)]
pub enum Completion {
    /// A newer query was issued after this one.
    Stale,
    /// Labels to display, in service order.
    Shown(Vec<String>),
    /// Zero suggestions; the list should be hidden.
    Empty,
    /// The query failed; the list should be hidden.
    Failed(NetworkError),
}

#[derive(Debug)]
pub struct AutocompleteField {
    field: Field,
    text: String,
    state: FieldState,
    suggestions: Vec<Place>,
    cached: Option<Coordinate>,
    issued: u64,
}

impl AutocompleteField {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            text: String::new(),
            state: FieldState::Idle,
            suggestions: Vec::new(),
            cached: None,
            issued: 0,
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn suggestions(&self) -> &[Place] {
        &self.suggestions
    }

    /// Coordinate of the picked suggestion, if the text hasn't changed since.
    pub fn cached(&self) -> Option<Coordinate> {
        self.cached
    }

    /// Records a text edit. Returns a ticket when a suggestion query should
    /// be sent, `None` for blank text.
    ///
    /// Any edit drops the cached coordinate and supersedes queries in flight.
    pub fn input_changed(&mut self, text: &str) -> Option<QueryTicket> {
        self.set_text(text);
        if text.trim().is_empty() {
            return None;
        }

        self.state = FieldState::Querying;
        Some(QueryTicket {
            field: self.field,
            seq: self.issued,
            text: text.trim().to_string(),
        })
    }

    /// Replaces the text without querying.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cached = None;
        self.suggestions.clear();
        self.state = FieldState::Idle;
        self.issued += 1;
    }

    pub fn complete(
        &mut self,
        ticket: &QueryTicket,
        result: Result<Vec<Place>, NetworkError>,
    ) -> Completion {
        if ticket.field != self.field || ticket.seq != self.issued {
            log::debug!(
                "Dropping stale {} suggestions for \"{}\" (#{}, latest #{})",
                self.field,
                ticket.text,
                ticket.seq,
                self.issued
            );
            return Completion::Stale;
        }

        self.suggestions.clear();
        self.cached = None;
        match result {
            Ok(places) if places.is_empty() => {
                self.state = FieldState::Idle;
                Completion::Empty
            }
            Ok(places) => {
                let labels = places.iter().map(|p| p.label.clone()).collect();
                self.suggestions = places;
                self.state = FieldState::ShowingList;
                Completion::Shown(labels)
            }
            Err(e) => {
                self.state = FieldState::Idle;
                Completion::Failed(e)
            }
        }
    }

    /// Picks the suggestion at `index`. Only valid while the list is shown.
    pub fn select(&mut self, index: usize) -> Option<Place> {
        if self.state != FieldState::ShowingList {
            return None;
        }
        let place = self.suggestions.get(index)?.clone();

        self.text = place.label.clone();
        self.cached = Some(place.coord);
        self.suggestions.clear();
        self.state = FieldState::Selected;
        Some(place)
    }

    /// Click outside the list. Returns whether a list was hidden.
    pub fn dismiss(&mut self) -> bool {
        if self.state != FieldState::ShowingList {
            return false;
        }
        self.suggestions.clear();
        self.state = FieldState::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(label: &str, lat: f64, lon: f64) -> Place {
        Place {
            label: label.to_string(),
            coord: Coordinate::new(lat, lon).unwrap(),
        }
    }

    fn shown(field: &mut AutocompleteField, text: &str, places: Vec<Place>) {
        let ticket = field.input_changed(text).unwrap();
        assert!(matches!(field.complete(&ticket, Ok(places)), Completion::Shown(_)));
    }

    #[test]
    fn blank_text_goes_idle_without_a_query() {
        let mut field = AutocompleteField::new(Field::Start);
        assert!(field.input_changed("   ").is_none());
        assert_eq!(field.state(), FieldState::Idle);
    }

    #[test]
    fn response_shows_labels_in_order() {
        let mut field = AutocompleteField::new(Field::Start);
        let ticket = field.input_changed("渋谷").unwrap();
        assert_eq!(field.state(), FieldState::Querying);
        assert_eq!(ticket.text(), "渋谷");

        let completion = field.complete(
            &ticket,
            Ok(vec![place("渋谷駅", 35.658, 139.701), place("渋谷区", 35.664, 139.698)]),
        );
        match completion {
            Completion::Shown(labels) => assert_eq!(labels, vec!["渋谷駅", "渋谷区"]),
            other => panic!("expected labels, got {:?}", other),
        }
        assert_eq!(field.state(), FieldState::ShowingList);
    }

    #[test]
    fn selecting_caches_the_coordinate_and_label() {
        let mut field = AutocompleteField::new(Field::Destination);
        shown(&mut field, "新宿", vec![place("新宿駅", 35.6896, 139.7006)]);

        let picked = field.select(0).unwrap();
        assert_eq!(picked.label, "新宿駅");
        assert_eq!(field.state(), FieldState::Selected);
        assert_eq!(field.text(), "新宿駅");
        assert_eq!(field.cached(), Coordinate::new(35.6896, 139.7006));
        assert!(field.suggestions().is_empty());
    }

    #[test]
    fn select_out_of_range_or_without_list_does_nothing() {
        let mut field = AutocompleteField::new(Field::Start);
        assert!(field.select(0).is_none());
        shown(&mut field, "品川", vec![place("品川駅", 35.628, 139.738)]);
        assert!(field.select(3).is_none());
        assert_eq!(field.state(), FieldState::ShowingList);
        assert!(field.cached().is_none());
    }

    #[test]
    fn editing_after_selection_invalidates_the_cache() {
        let mut field = AutocompleteField::new(Field::Start);
        shown(&mut field, "上野", vec![place("上野駅", 35.7138, 139.7773)]);
        field.select(0);
        assert!(field.cached().is_some());

        assert!(field.input_changed("上野公").is_some());
        assert!(field.cached().is_none());

        field.select(0);
        assert!(field.input_changed("").is_none());
        assert!(field.cached().is_none());
    }

    #[test]
    fn older_response_arriving_last_is_dropped() {
        let mut field = AutocompleteField::new(Field::Start);
        let first = field.input_changed("池").unwrap();
        let second = field.input_changed("池袋").unwrap();
        assert!(second.seq() > first.seq());

        let newer = field.complete(&second, Ok(vec![place("池袋駅", 35.7295, 139.7109)]));
        assert!(matches!(newer, Completion::Shown(_)));

        let older = field.complete(&first, Ok(vec![place("池上", 35.5716, 139.7046)]));
        assert!(matches!(older, Completion::Stale));
        assert_eq!(field.suggestions()[0].label, "池袋駅");
    }

    #[test]
    fn clearing_supersedes_queries_in_flight() {
        let mut field = AutocompleteField::new(Field::Start);
        let ticket = field.input_changed("秋葉原").unwrap();
        field.input_changed("");
        let late = field.complete(&ticket, Ok(vec![place("秋葉原駅", 35.6984, 139.7731)]));
        assert!(matches!(late, Completion::Stale));
        assert_eq!(field.state(), FieldState::Idle);
    }

    #[test]
    fn empty_or_failed_response_goes_idle() {
        let mut field = AutocompleteField::new(Field::Start);
        let ticket = field.input_changed("zzzz").unwrap();
        assert!(matches!(field.complete(&ticket, Ok(Vec::new())), Completion::Empty));
        assert_eq!(field.state(), FieldState::Idle);

        let ticket = field.input_changed("zzzzz").unwrap();
        let failure = NetworkError::Status {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(matches!(field.complete(&ticket, Err(failure)), Completion::Failed(_)));
        assert_eq!(field.state(), FieldState::Idle);
    }

    #[test]
    fn dismiss_hides_list_only() {
        let mut field = AutocompleteField::new(Field::Start);
        assert!(!field.dismiss());
        shown(&mut field, "銀座", vec![place("銀座駅", 35.6717, 139.7650)]);
        assert!(field.dismiss());
        assert_eq!(field.state(), FieldState::Idle);
        assert!(field.suggestions().is_empty());
        assert_eq!(field.text(), "銀座");
    }

    #[test]
    fn tickets_from_the_other_field_are_stale() {
        let mut start = AutocompleteField::new(Field::Start);
        let mut destination = AutocompleteField::new(Field::Destination);
        start.input_changed("a");
        let ticket = destination.input_changed("a").unwrap();
        assert!(matches!(start.complete(&ticket, Ok(Vec::new())), Completion::Stale));
    }
}
