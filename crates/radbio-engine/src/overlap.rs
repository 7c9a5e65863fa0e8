// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Overlap Policy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spatial-overlap risk penalty between two courses.
//!
//! A qualitative overlap level maps to a multiplicative BED penalty; the
//! application mode decides whether it loads the whole cumulative sum or
//! only the recovery-adjusted first course. Overlap requires both courses
//! to contribute dose: with a single dosed course the factor collapses
//! to 1.

use serde::{Deserialize, Serialize};

/// Penalty fraction for partial spatial overlap.
const PENALTY_PARTIAL: f64 = 0.15;
/// Penalty fraction for high spatial overlap.
const PENALTY_HIGH: f64 = 0.30;

/// Qualitative degree of spatial overlap between the two courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapLevel {
    None,
    Partial,
    High,
}

impl OverlapLevel {
    pub fn penalty_fraction(&self) -> f64 {
        match self {
            OverlapLevel::None => 0.0,
            OverlapLevel::Partial => PENALTY_PARTIAL,
            OverlapLevel::High => PENALTY_HIGH,
        }
    }
}

/// Which BED quantity the penalty factor multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PenaltyMode {
    /// Factor loads the sum of adjusted RT1 BED and RT2 BED.
    CumulativeSum,
    /// Factor loads only the adjusted RT1 BED; RT2 adds unpenalized.
    FirstCourseOnly,
}

/// Overlap level paired with its application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapPolicy {
    pub level: OverlapLevel,
    pub mode: PenaltyMode,
}

impl OverlapPolicy {
    /// No overlap. The mode is irrelevant here and is not an input; both
    /// modes are numerically identical at zero penalty.
    pub fn none() -> Self {
        OverlapPolicy {
            level: OverlapLevel::None,
            mode: PenaltyMode::CumulativeSum,
        }
    }

    /// Overlapping volumes; the mode selects where the factor applies.
    pub fn with_overlap(level: OverlapLevel, mode: PenaltyMode) -> Self {
        OverlapPolicy { level, mode }
    }

    /// Multiplicative factor `1 + penalty_fraction`.
    pub fn penalty_factor(&self) -> f64 {
        1.0 + self.level.penalty_fraction()
    }

    /// Combine the recovery-adjusted RT1 BED with the RT2 BED [Gy].
    ///
    /// When either contribution is zero only one course actually delivers
    /// dose, no overlap risk exists, and the factor is suppressed.
    pub fn combine_bed(&self, effective_rt1_bed_gy: f64, rt2_bed_gy: f64) -> f64 {
        let both_dosed = effective_rt1_bed_gy > 0.0 && rt2_bed_gy > 0.0;
        let factor = if both_dosed { self.penalty_factor() } else { 1.0 };
        match self.mode {
            PenaltyMode::CumulativeSum => (effective_rt1_bed_gy + rt2_bed_gy) * factor,
            PenaltyMode::FirstCourseOnly => effective_rt1_bed_gy * factor + rt2_bed_gy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_fractions() {
        assert_eq!(OverlapLevel::None.penalty_fraction(), 0.0);
        assert_eq!(OverlapLevel::Partial.penalty_fraction(), 0.15);
        assert_eq!(OverlapLevel::High.penalty_fraction(), 0.30);
    }

    #[test]
    fn test_cumulative_sum_mode() {
        let policy = OverlapPolicy::with_overlap(OverlapLevel::Partial, PenaltyMode::CumulativeSum);
        let combined = policy.combine_bed(42.75, 60.0);
        assert!(
            (combined - (42.75 + 60.0) * 1.15).abs() < 1e-9,
            "combined should be 118.1625: {}",
            combined
        );
    }

    #[test]
    fn test_first_course_only_mode() {
        let policy =
            OverlapPolicy::with_overlap(OverlapLevel::High, PenaltyMode::FirstCourseOnly);
        let combined = policy.combine_bed(40.0, 60.0);
        assert!((combined - (40.0 * 1.30 + 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_is_plain_sum() {
        let policy = OverlapPolicy::none();
        assert!((policy.combine_bed(42.75, 60.0) - 102.75).abs() < 1e-12);
    }

    #[test]
    fn test_single_dosed_course_suppresses_penalty() {
        let policy = OverlapPolicy::with_overlap(OverlapLevel::High, PenaltyMode::CumulativeSum);
        assert!((policy.combine_bed(0.0, 60.0) - 60.0).abs() < 1e-12);
        assert!((policy.combine_bed(42.75, 0.0) - 42.75).abs() < 1e-12);
    }
}
