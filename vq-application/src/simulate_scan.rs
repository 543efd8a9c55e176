use std::time::Instant;

use super::*;

/// Result of one admin scan-simulator run. The simulator only reports
/// what the platform *would* do; there is no vending hardware behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Matched(usecases::QrResolution),
    NotFound { hints: &'static [&'static str] },
}

/// Resolves a scanned input and writes an audit row for successes and
/// failures alike. A failing audit write is logged and never fails
/// the scan itself.
pub fn simulate_scan(
    connections: &sqlite::Connections,
    admin_user_id: &Id,
    raw_input: &str,
) -> super::Result<ScanOutcome> {
    let started = Instant::now();
    let now = Timestamp::now();
    let outcome = {
        let connection = connections.shared()?;
        let outcome = match usecases::resolve_qr_code(&connection.inner(), raw_input, now) {
            Ok(resolution) => ScanOutcome::Matched(resolution),
            Err(usecases::Error::QrCodeNotFound) => ScanOutcome::NotFound {
                hints: usecases::REMEDIATION_HINTS,
            },
            Err(err) => return Err(err.into()),
        };
        outcome
    };
    let elapsed_millis = started.elapsed().as_millis() as u64;

    let (outcome_kind, response) = audit_payload(&outcome)?;
    let scan_log = ScanLog {
        id: Id::new(),
        admin_user_id: admin_user_id.clone(),
        raw_input: raw_input.to_owned(),
        outcome: outcome_kind,
        response,
        elapsed_millis,
        created_at: now,
    };
    if let Err(err) = write_audit_log(connections, &scan_log) {
        warn!("Failed to write scan audit log: {err}");
    }

    Ok(outcome)
}

fn audit_payload(outcome: &ScanOutcome) -> super::Result<(String, String)> {
    let (kind, payload) = match outcome {
        ScanOutcome::Matched(resolution) => (
            resolution.action.kind.to_owned(),
            serde_json::json!({
                "success": true,
                "qr_type": resolution.qr_code.qr_type.as_ref(),
                "action": resolution.action.kind,
                "message": resolution.action.message,
                "reference": resolution.action.reference,
            }),
        ),
        ScanOutcome::NotFound { hints } => (
            "NOT_FOUND".to_owned(),
            serde_json::json!({
                "success": false,
                "hints": hints,
            }),
        ),
    };
    Ok((kind, serde_json::to_string(&payload)?))
}

fn write_audit_log(connections: &sqlite::Connections, scan_log: &ScanLog) -> super::Result<()> {
    let connection = connections.exclusive()?;
    connection.inner().create_scan_log(scan_log)?;
    Ok(())
}
