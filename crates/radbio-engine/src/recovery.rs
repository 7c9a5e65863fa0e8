// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Recovery Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Inter-course biological recovery.
//!
//! Step function over the elapsed interval between courses. Recovery
//! saturates at [`RECOVERY_FRACTION_CAP`]; no further repair is modeled
//! beyond two years.

use radbio_types::constants::RECOVERY_FRACTION_CAP;
use serde::{Deserialize, Serialize};

/// Recovery fraction reached at the 6-month breakpoint.
const RECOVERY_6_MONTHS: f64 = 0.25;
/// Recovery fraction reached at the 12-month breakpoint.
const RECOVERY_12_MONTHS: f64 = 0.50;

/// How the first course is carried into the cumulative sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMode {
    /// Worst case: the full first-course BED persists.
    FullSummation,
    /// Discount the first course by the interval-dependent step function.
    TimeBased,
}

/// Result of applying the recovery model to an interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecoveryOutcome {
    /// Fraction of the first course biologically forgiven, in [0, 0.65].
    pub recovery_fraction: f64,
    /// Fraction still counted against tolerance, `1 - recovery_fraction`.
    pub remaining_fraction: f64,
}

impl RecoveryOutcome {
    fn from_fraction(recovery_fraction: f64) -> Self {
        RecoveryOutcome {
            recovery_fraction,
            remaining_fraction: 1.0 - recovery_fraction,
        }
    }

    /// No recovery; the full first-course BED remains.
    pub fn none() -> Self {
        Self::from_fraction(0.0)
    }

    /// Outcome for a given mode and elapsed interval.
    pub fn evaluate(mode: RecoveryMode, interval_months: f64) -> Self {
        match mode {
            RecoveryMode::FullSummation => Self::none(),
            RecoveryMode::TimeBased => Self::from_fraction(recovery_fraction(interval_months)),
        }
    }
}

/// Recovered fraction after `months` between courses.
///
/// Monotone non-decreasing step function; negative input clamps to zero
/// elapsed time. Total over all finite input.
pub fn recovery_fraction(months: f64) -> f64 {
    let months = months.max(0.0);
    if months < 6.0 {
        0.0
    } else if months < 12.0 {
        RECOVERY_6_MONTHS
    } else if months < 24.0 {
        RECOVERY_12_MONTHS
    } else {
        RECOVERY_FRACTION_CAP
    }
}
