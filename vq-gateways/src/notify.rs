use std::sync::Arc;

use vq_core::gateways::{email::EmailGateway, notify::NotificationGateway};
use vq_entities::tracker::PizzaTracker;

use crate::user_communication;

/// Sends tracker alerts by e-mail. Delivery runs on a background
/// thread inside the e-mail gateway; failures are logged there and
/// never surface to the caller.
#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
}

impl Notify {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
        }
    }
}

impl NotificationGateway for Notify {
    fn milestone_reached(&self, recipients: &[String], tracker: &PizzaTracker, percent: u8) {
        log::info!(
            "Sending milestone e-mails to {} recipients after tracker {} passed {percent}%",
            recipients.len(),
            tracker.id,
        );
        let content = user_communication::milestone_email(tracker, percent);
        self.email_gw.compose_and_send(recipients, &content);
    }

    fn tracker_completed(
        &self,
        recipients: &[String],
        tracker: &PizzaTracker,
        completion_count: u32,
    ) {
        log::info!(
            "Sending completion e-mails to {} recipients after tracker {} finished cycle {completion_count}",
            recipients.len(),
            tracker.id,
        );
        let content = user_communication::completion_email(tracker, completion_count);
        self.email_gw.compose_and_send(recipients, &content);
    }
}
