use crate::{progress::percent_of_goal, usecases::prelude::*};

/// Outcome of applying one qualifying revenue event to a tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub previous_percent: f64,
    pub percent: f64,
    pub is_complete: bool,
    /// Configured milestone percentages crossed by this event, in
    /// ascending order.
    pub milestones_crossed: Vec<u8>,
}

/// Pure progress arithmetic; persistence and the once-only completion
/// bookkeeping happen in the surrounding transaction.
pub fn apply_revenue(
    tracker: &PizzaTracker,
    amount_cents: i64,
    milestones: &[u8],
) -> Result<ProgressUpdate> {
    if amount_cents <= 0 {
        return Err(Error::InvalidAmount);
    }
    let previous_percent = percent_of_goal(tracker.current_revenue_cents, tracker.revenue_goal_cents);
    let updated_revenue = tracker.current_revenue_cents.saturating_add(amount_cents);
    let percent = percent_of_goal(updated_revenue, tracker.revenue_goal_cents);
    let is_complete = updated_revenue >= tracker.revenue_goal_cents;
    let milestones_crossed = milestones
        .iter()
        .copied()
        .filter(|&m| previous_percent < f64::from(m) && f64::from(m) <= percent)
        .collect();
    Ok(ProgressUpdate {
        previous_percent,
        percent,
        is_complete,
        milestones_crossed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vq_entities::{builders::*, notification::DEFAULT_MILESTONES};

    fn tracker(goal: i64, current: i64) -> PizzaTracker {
        PizzaTracker::build().goal(goal).revenue(current).finish()
    }

    #[test]
    fn completion_event_reports_clamped_percent() {
        let update = apply_revenue(&tracker(1000, 950), 100, &DEFAULT_MILESTONES).unwrap();
        assert_eq!(update.percent, 100.0);
        assert!(update.is_complete);
        assert_eq!(update.milestones_crossed, vec![100]);
    }

    #[test]
    fn crossing_multiple_milestones_at_once() {
        let update = apply_revenue(&tracker(1000, 200), 600, &DEFAULT_MILESTONES).unwrap();
        assert_eq!(update.milestones_crossed, vec![25, 50, 75]);
        assert!(!update.is_complete);
    }

    #[test]
    fn milestone_already_passed_is_not_reported_again() {
        let update = apply_revenue(&tracker(1000, 260), 100, &DEFAULT_MILESTONES).unwrap();
        assert!(update.milestones_crossed.is_empty());
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        assert!(matches!(
            apply_revenue(&tracker(1000, 0), 0, &DEFAULT_MILESTONES),
            Err(Error::InvalidAmount)
        ));
        assert!(matches!(
            apply_revenue(&tracker(1000, 0), -5, &DEFAULT_MILESTONES),
            Err(Error::InvalidAmount)
        ));
    }

    #[test]
    fn milestone_reached_exactly_is_reported() {
        let update = apply_revenue(&tracker(1000, 200), 50, &DEFAULT_MILESTONES).unwrap();
        assert_eq!(update.milestones_crossed, vec![25]);
    }
}
