use crate::id::Id;

/// Milestone percentages that trigger an alert by default.
pub const DEFAULT_MILESTONES: [u8; 5] = [25, 50, 75, 90, 100];

/// Per-business alert configuration. A single row per business,
/// upserted; not time-series data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub business_id: Id,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    /// Strictly increasing percentages in `1..=100`.
    pub milestones: Vec<u8>,
}

impl NotificationPreferences {
    pub fn with_defaults(business_id: Id) -> Self {
        Self {
            business_id,
            email_enabled: true,
            sms_enabled: false,
            push_enabled: false,
            milestones: DEFAULT_MILESTONES.to_vec(),
        }
    }
}
