use crate::entities::tracker::PizzaTracker;

/// Outbound milestone alerts for pizza trackers. Implementations must
/// never fail the calling request; delivery problems are logged and
/// swallowed.
pub trait NotificationGateway {
    fn milestone_reached(&self, recipients: &[String], tracker: &PizzaTracker, percent: u8);
    fn tracker_completed(
        &self,
        recipients: &[String],
        tracker: &PizzaTracker,
        completion_count: u32,
    );
}
