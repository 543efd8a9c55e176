use super::*;

/// Counts one impression of the tracker's promotional banner and
/// returns the current tracker state.
pub fn view_tracker(
    connections: &sqlite::Connections,
    tracker_id: &Id,
) -> super::Result<PizzaTracker> {
    let connection = connections.exclusive()?;
    connection.inner().increment_promo_views(tracker_id)?;
    let tracker = connection.inner().get_tracker(tracker_id)?;
    Ok(tracker)
}

/// Counts one click on the tracker's promotional banner.
pub fn click_promo(
    connections: &sqlite::Connections,
    tracker_id: &Id,
) -> super::Result<PizzaTracker> {
    let connection = connections.exclusive()?;
    connection.inner().increment_promo_clicks(tracker_id)?;
    let tracker = connection.inner().get_tracker(tracker_id)?;
    Ok(tracker)
}
