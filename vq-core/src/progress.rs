use crate::entities::tracker::PizzaTracker;

pub trait Progress {
    /// Percent complete, clamped to `[0, 100]` even when the
    /// accumulated revenue exceeds the goal.
    fn progress_percent(&self) -> f64;
    fn is_complete(&self) -> bool;
}

impl Progress for PizzaTracker {
    fn progress_percent(&self) -> f64 {
        percent_of_goal(self.current_revenue_cents, self.revenue_goal_cents)
    }

    fn is_complete(&self) -> bool {
        self.current_revenue_cents >= self.revenue_goal_cents
    }
}

pub fn percent_of_goal(current_cents: i64, goal_cents: i64) -> f64 {
    if goal_cents <= 0 {
        return 100.0;
    }
    let percent = current_cents as f64 / goal_cents as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::builders::*;

    fn tracker(goal: i64, current: i64) -> PizzaTracker {
        PizzaTracker::build().goal(goal).revenue(current).finish()
    }

    #[test]
    fn percent_is_clamped_to_upper_bound() {
        assert_eq!(tracker(1000, 1050).progress_percent(), 100.0);
        assert_eq!(tracker(1000, 1_000_000).progress_percent(), 100.0);
    }

    #[test]
    fn percent_is_clamped_to_lower_bound() {
        assert_eq!(tracker(1000, -50).progress_percent(), 0.0);
    }

    #[test]
    fn percent_of_partial_progress() {
        assert_eq!(tracker(1000, 250).progress_percent(), 25.0);
        assert_eq!(tracker(1000, 950).progress_percent(), 95.0);
    }

    #[test]
    fn zero_goal_counts_as_complete() {
        let t = tracker(0, 0);
        assert_eq!(t.progress_percent(), 100.0);
        assert!(t.is_complete());
    }

    #[test]
    fn complete_at_exact_goal() {
        assert!(tracker(1000, 1000).is_complete());
        assert!(!tracker(1000, 999).is_complete());
    }
}
