//! Drift detection: live internal stock vs computed ideal.

use serde::Serialize;
use stockflow_core::ChannelId;
use tracing::debug;

/// Which threshold tripped the sync requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftTrigger {
    Percent,
    Absolute,
    Both,
}

/// Structured drift evaluation for one channel.
///
/// Carries the numbers and the thresholds they were judged against; the
/// human-readable message is a separate presentation step
/// ([`reason`](DriftReport::reason)) so callers can render it however and
/// wherever they localize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftReport {
    pub sync_required: bool,
    /// `|ideal - internal|` in units.
    pub abs_drift: i64,
    /// `abs_drift / ideal`, defined as 0 when `ideal <= 0`.
    pub pct_drift: f64,
    pub pct_threshold: f64,
    pub abs_threshold: i64,
    pub trigger: Option<DriftTrigger>,
}

impl DriftReport {
    /// Render the drift figures as a reason string; empty when no sync is
    /// required.
    pub fn reason(&self) -> String {
        if self.trigger.is_none() {
            return String::new();
        }

        let pct = (self.pct_drift * 100.0).round() as i64;
        let mut reason = format!(
            "deviation ({} units / {}%) exceeds threshold {}%",
            self.abs_drift, pct, self.pct_threshold
        );
        if self.abs_threshold > 0 {
            reason.push_str(&format!(" / {} units", self.abs_threshold));
        }
        reason
    }
}

/// Evaluate whether a channel's internal stock has drifted far enough from
/// its ideal to require a resync.
///
/// Sync is required when the percentage drift exceeds `pct_threshold` (as a
/// percentage) OR, if `abs_threshold > 0`, the absolute drift meets or
/// exceeds it. An `abs_threshold` of zero or less disables the absolute
/// check. Never fails; `ideal <= 0` defines the percentage drift as 0
/// rather than dividing by zero.
///
/// `channel_id` only identifies the channel in the log record; it does not
/// affect the computation.
pub fn check_drift(
    channel_id: &ChannelId,
    current_internal: i64,
    ideal: i64,
    pct_threshold: f64,
    abs_threshold: i64,
) -> DriftReport {
    let abs_drift = (ideal - current_internal).abs();
    let pct_drift = if ideal > 0 {
        abs_drift as f64 / ideal as f64
    } else {
        0.0
    };

    let pct_trigger = pct_drift > pct_threshold / 100.0;
    let abs_trigger = abs_threshold > 0 && abs_drift >= abs_threshold;

    let trigger = match (pct_trigger, abs_trigger) {
        (true, true) => Some(DriftTrigger::Both),
        (true, false) => Some(DriftTrigger::Percent),
        (false, true) => Some(DriftTrigger::Absolute),
        (false, false) => None,
    };

    if trigger.is_some() {
        debug!(channel = %channel_id, abs_drift, pct_drift, "drift exceeds threshold; sync required");
    }

    DriftReport {
        sync_required: trigger.is_some(),
        abs_drift,
        pct_drift,
        pct_threshold,
        abs_threshold,
        trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(id: &str) -> ChannelId {
        ChannelId::new(id)
    }

    #[test]
    fn percentage_threshold_triggers_sync() {
        let report = check_drift(&ch("web"), 80, 100, 15.0, 0);

        assert!(report.sync_required);
        assert_eq!(report.abs_drift, 20);
        assert_eq!(report.pct_drift, 0.20);
        assert_eq!(report.trigger, Some(DriftTrigger::Percent));
    }

    #[test]
    fn zero_ideal_disables_the_percentage_check() {
        let report = check_drift(&ch("web"), 5, 0, 10.0, 3);

        assert!(report.sync_required);
        assert_eq!(report.pct_drift, 0.0);
        assert_eq!(report.abs_drift, 5);
        assert_eq!(report.trigger, Some(DriftTrigger::Absolute));
    }

    #[test]
    fn within_tolerance_reports_no_sync_and_empty_reason() {
        let report = check_drift(&ch("web"), 95, 100, 10.0, 0);

        assert!(!report.sync_required);
        assert_eq!(report.trigger, None);
        assert_eq!(report.reason(), "");
    }

    #[test]
    fn zero_abs_threshold_disables_the_absolute_check() {
        // 5% drift, under the 10% threshold; abs drift 5 would trip an
        // absolute threshold of 5 if it were enabled.
        let report = check_drift(&ch("web"), 95, 100, 10.0, 0);
        assert!(!report.sync_required);

        let report = check_drift(&ch("web"), 95, 100, 10.0, 5);
        assert!(report.sync_required);
        assert_eq!(report.trigger, Some(DriftTrigger::Absolute));
    }

    #[test]
    fn both_thresholds_exceeded_reports_both() {
        let report = check_drift(&ch("web"), 50, 100, 10.0, 20);

        assert!(report.sync_required);
        assert_eq!(report.trigger, Some(DriftTrigger::Both));
    }

    #[test]
    fn drift_is_symmetric_around_the_ideal() {
        let over = check_drift(&ch("web"), 120, 100, 15.0, 0);
        let under = check_drift(&ch("web"), 80, 100, 15.0, 0);

        assert_eq!(over.abs_drift, under.abs_drift);
        assert_eq!(over.sync_required, under.sync_required);
    }

    #[test]
    fn reason_reports_units_percentage_and_thresholds() {
        let report = check_drift(&ch("web"), 80, 100, 15.0, 10);
        let reason = report.reason();

        assert!(reason.contains("20 units"));
        assert!(reason.contains("20%"));
        assert!(reason.contains("15%"));
        assert!(reason.contains("10 units"));
    }

    #[test]
    fn reason_omits_absolute_threshold_when_disabled() {
        let report = check_drift(&ch("web"), 80, 100, 15.0, 0);
        let reason = report.reason();

        assert!(reason.contains("15%"));
        assert!(!reason.contains("/ 0 units"));
    }
}
