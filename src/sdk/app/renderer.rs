use super::session::Session;
use super::view::{MapView, FIT_PADDING_PX};
use crate::sdk::routing::{Bounds, Coordinate, NetworkError, RoutingProvider};

/// Fetches a route and puts it on screen.
///
/// Nothing on the view changes unless the directions call and its parsing
/// both succeed.
pub fn render_route<P, V>(
    provider: &P,
    view: &mut V,
    session: &mut Session,
    start: Coordinate,
    end: Coordinate,
) -> Result<(), NetworkError>
where
    P: RoutingProvider + ?Sized,
    V: MapView + ?Sized,
{
    let route = provider.get_directions(start, end)?;
    session.replace_route(view, &route.geometry);

    view.show_summary(
        &route.summary.distance_label(),
        &route.summary.duration_label(),
    );
    view.show_instructions(&route.instructions);

    if let Some(bounds) = Bounds::from_points(route.geometry.iter().copied()) {
        view.fit_bounds(bounds, FIT_PADDING_PX);
    }

    log::info!(
        "Route {} -> {}: {:.2} km, {:.2} h, {} steps",
        start,
        end,
        route.summary.distance_km(),
        route.summary.duration_hours(),
        route.instructions.len()
    );
    Ok(())
}
