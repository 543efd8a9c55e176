use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    /// Tracker state after the event, i.e. reset to zero if the event
    /// completed the cycle.
    pub tracker: PizzaTracker,
    pub update: usecases::ProgressUpdate,
}

/// Applies one qualifying revenue event: appends the event, advances
/// the tracker and handles the once-only cycle completion, all in one
/// transaction. Milestone alerts go out after the commit.
pub fn record_revenue<N>(
    connections: &sqlite::Connections,
    notify: &N,
    tracker_id: &Id,
    amount_cents: i64,
) -> super::Result<RevenueReport>
where
    N: NotificationGateway + ?Sized,
{
    let now = Timestamp::now();
    let mut connection = connections.exclusive()?;
    let (tracker, snapshot, update, prefs, recipients) = connection.transaction(|conn| {
        let tracker = conn.get_tracker(tracker_id)?;
        let business = conn.get_business(&tracker.business_id)?;
        let prefs = usecases::notification_preferences_of_business(conn, &tracker.business_id)?;
        let update = usecases::apply_revenue(&tracker, amount_cents, &prefs.milestones)?;
        conn.append_revenue_event(&RevenueEvent {
            id: Id::new(),
            tracker_id: tracker_id.clone(),
            amount_cents,
            created_at: now,
        })?;
        conn.add_tracker_revenue(tracker_id, amount_cents)?;
        // Milestone alerts report the revenue as of this event, before
        // a completing event zeroes the counter.
        let mut snapshot = tracker;
        snapshot.current_revenue_cents = snapshot.current_revenue_cents.saturating_add(amount_cents);
        if update.is_complete {
            conn.complete_tracker_cycle(tracker_id, now)?;
        }
        let tracker = conn.get_tracker(tracker_id)?;
        Ok::<_, usecases::Error>((tracker, snapshot, update, prefs, vec![business.owner_email]))
    })?;

    if prefs.email_enabled {
        for &percent in &update.milestones_crossed {
            if update.is_complete && percent == 100 {
                continue;
            }
            notify.milestone_reached(&recipients, &snapshot, percent);
        }
        if update.is_complete {
            notify.tracker_completed(&recipients, &tracker, tracker.completion_count);
        }
    }

    Ok(RevenueReport { tracker, update })
}
