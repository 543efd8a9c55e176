use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::{id::Id, time::Timestamp};

/// What a scanned code routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum QrType {
    DynamicVoting,
    MachineSales,
    SpinWheel,
    Promotion,
    DynamicVending,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid QR code type")]
pub struct QrTypeParseError;

impl QrType {
    pub fn parse(s: &str) -> Result<Self, QrTypeParseError> {
        Self::from_str(s).map_err(|_| QrTypeParseError)
    }
}

/// A scannable token. Immutable once created; scans against it are
/// recorded as append-only log entries, never as mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    pub id: Id,
    /// Unique token string, stored without the optional `qr_` prefix.
    pub code: String,
    pub business_id: Id,
    pub campaign_id: Option<Id>,
    pub machine_id: Option<Id>,
    pub qr_type: QrType,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_qr_type() {
        assert_eq!(QrType::parse("dynamic_voting").unwrap(), QrType::DynamicVoting);
        assert_eq!(QrType::parse("spin_wheel").unwrap(), QrType::SpinWheel);
        assert!(QrType::parse("unknown").is_err());
    }

    #[test]
    fn qr_type_as_str() {
        assert_eq!(QrType::MachineSales.as_ref(), "machine_sales");
    }
}
