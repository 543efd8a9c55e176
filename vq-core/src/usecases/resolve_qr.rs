use url::Url;

use crate::usecases::prelude::*;

/// User-facing guidance returned when a scanned code cannot be matched.
pub const REMEDIATION_HINTS: &[&str] = &[
    "Improve the lighting and hold the camera steady",
    "Make sure the whole code fits inside the frame",
    "Check the token for typos if it was entered manually",
    "Codes are case-sensitive except for the qr_ prefix",
];

/// The fixed downstream action the admin scan simulator reports for a
/// matched code. Purely a response template; there is no payment or
/// vending integration behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedAction {
    pub kind: &'static str,
    pub message: String,
    /// Synthetic identifier derived from the record id and scan time.
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrResolution {
    pub qr_code: QrCode,
    pub action: SimulatedAction,
}

/// Reduces a raw scanned string to the bare code token: extracts the
/// `code` query parameter from full URLs and strips a leading
/// `qr_`/`QR_` prefix.
pub fn normalize_scan_input(raw: &str) -> String {
    let trimmed = raw.trim();
    let code = if trimmed.to_ascii_lowercase().starts_with("http") {
        Url::parse(trimmed)
            .ok()
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == "code")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_else(|| trimmed.to_owned())
    } else {
        trimmed.to_owned()
    };
    strip_qr_prefix(&code).to_owned()
}

fn strip_qr_prefix(code: &str) -> &str {
    if code.len() > 3 && code[..3].eq_ignore_ascii_case("qr_") {
        &code[3..]
    } else {
        code
    }
}

pub fn resolve_qr_code<R>(repo: &R, raw_input: &str, now: Timestamp) -> Result<QrResolution>
where
    R: QrCodeRepo,
{
    let code = normalize_scan_input(raw_input);
    if code.is_empty() {
        return Err(Error::QrCodeNotFound);
    }
    // Stored codes are inconsistently formatted: some rows carry the
    // qr_ prefix, some do not. Probe both spellings.
    let qr_code = match repo.try_get_qr_code_by_code(&code)? {
        Some(qr_code) => qr_code,
        None => repo
            .try_get_qr_code_by_code(&format!("qr_{code}"))?
            .ok_or(Error::QrCodeNotFound)?,
    };
    let action = simulated_action(&qr_code, now);
    Ok(QrResolution { qr_code, action })
}

fn simulated_action(qr_code: &QrCode, now: Timestamp) -> SimulatedAction {
    let (kind, prefix, message) = match qr_code.qr_type {
        QrType::DynamicVoting => (
            "VOTING_INITIATED",
            "VOTE",
            "Voting session opened for the attached campaign",
        ),
        QrType::MachineSales => (
            "PURCHASE_READY",
            "SALE",
            "Machine checkout prepared for the scanned code",
        ),
        QrType::SpinWheel => (
            "SPIN_WHEEL_ACTIVATED",
            "SPIN",
            "Spin wheel unlocked for this scan",
        ),
        QrType::Promotion => (
            "PROMOTION_APPLIED",
            "PROMO",
            "Promotion attached to the current session",
        ),
        QrType::DynamicVending => (
            "VENDING_SESSION_STARTED",
            "VEND",
            "Vending session opened on the target machine",
        ),
    };
    let short_id: String = qr_code.id.as_str().chars().take(8).collect();
    SimulatedAction {
        kind,
        message: message.to_owned(),
        reference: format!("{prefix}-{short_id}-{}", now.as_secs()),
    }
}
