use vq_core::gateways::email::EmailContent;
use vq_entities::tracker::PizzaTracker;

pub fn milestone_email(tracker: &PizzaTracker, percent: u8) -> EmailContent {
    let subject = format!("{}: {percent}% of your revenue goal reached", tracker.name);
    let body = format!(
        "Good news!\n\n\
         Your tracker \"{name}\" just passed {percent}% of its revenue goal.\n\
         Current revenue: {current} cents of {goal} cents.\n\n\
         Keep it up!",
        name = tracker.name,
        current = tracker.current_revenue_cents,
        goal = tracker.revenue_goal_cents,
    );
    EmailContent { subject, body }
}

pub fn completion_email(tracker: &PizzaTracker, completion_count: u32) -> EmailContent {
    let subject = format!("{}: revenue goal completed!", tracker.name);
    let body = format!(
        "Congratulations!\n\n\
         Your tracker \"{name}\" reached its revenue goal of {goal} cents.\n\
         This is completion number {completion_count}. The tracker has been\n\
         reset and a new cycle has started.",
        name = tracker.name,
        goal = tracker.revenue_goal_cents,
    );
    EmailContent { subject, body }
}
