use super::coord::Coordinate;
use super::error::{RoutingError, ValidationError};
use super::service::RoutingProvider;
use serde::Serialize;

/// Result cap for suggestion queries.
pub const AUTOCOMPLETE_SIZE: usize = 5;

/// A geocoding match: display label plus its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub label: String,
    pub coord: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteQuery {
    pub text: String,
    /// ISO 3166 country code passed as `boundary.country`.
    pub country: String,
    pub size: usize,
}

impl AutocompleteQuery {
    pub fn new(text: &str, country: &str, size: usize) -> Self {
        Self {
            text: text.to_string(),
            country: country.to_string(),
            size,
        }
    }
}

/// Resolves free text to the coordinate of the first geocoding match.
///
/// Blank input fails with [`ValidationError::EmptyAddress`] before any request
/// is made; zero matches fail with [`RoutingError::NotFound`].
pub fn resolve_address<P>(provider: &P, address: &str) -> Result<Coordinate, RoutingError>
where
    P: RoutingProvider + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(ValidationError::EmptyAddress.into());
    }

    log::debug!("Geocoding address: \"{}\"", address);
    let places = provider.geocode(address)?;

    let place = places.into_iter().next().ok_or_else(|| RoutingError::NotFound {
        query: address.to_string(),
    })?;
    log::info!("Resolved \"{}\" to {} ({})", address, place.coord, place.label);
    Ok(place.coord)
}
