use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub milestones: Vec<u8>,
}

pub fn update_notification_preferences<R>(
    repo: &R,
    business_id: &Id,
    settings: NotificationSettings,
) -> Result<NotificationPreferences>
where
    R: NotificationPrefsRepo + BusinessRepo,
{
    let NotificationSettings {
        email_enabled,
        sms_enabled,
        push_enabled,
        milestones,
    } = settings;
    repo.get_business(business_id)?;
    let mut milestones = milestones;
    milestones.sort_unstable();
    milestones.dedup();
    if milestones.is_empty() || milestones.iter().any(|&m| m == 0 || m > 100) {
        return Err(Error::InvalidMilestones);
    }
    let prefs = NotificationPreferences {
        business_id: business_id.clone(),
        email_enabled,
        sms_enabled,
        push_enabled,
        milestones,
    };
    repo.upsert_notification_preferences(&prefs)?;
    Ok(prefs)
}

/// Loads the business's configuration, falling back to the defaults
/// for tenants that never saved one.
pub fn notification_preferences_of_business<R>(
    repo: &R,
    business_id: &Id,
) -> Result<NotificationPreferences>
where
    R: NotificationPrefsRepo,
{
    Ok(repo
        .try_get_notification_preferences(business_id)?
        .unwrap_or_else(|| NotificationPreferences::with_defaults(business_id.clone())))
}
