// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Cumulative Assessment
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-course cumulative BED/EQD2 and tolerance classification.

use crate::dose::{eqd2_from_bed, DoseMetrics};
use crate::overlap::OverlapPolicy;
use crate::recovery::RecoveryOutcome;
use serde::Serialize;

/// Ratio below which the cumulative EQD2 is comfortably within tolerance.
const RATIO_BORDERLINE: f64 = 0.9;
/// Ratio at which tolerance is met or exceeded.
const RATIO_EXCEEDED: f64 = 1.0;

/// Qualitative standing of the cumulative EQD2 against a tissue limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskBand {
    WithinTolerance,
    Borderline,
    AboveTolerance,
    /// No tolerance dose defined for the structure; nothing to classify.
    NotApplicable,
}

/// Classify a cumulative-EQD2-to-tolerance ratio.
pub fn classify_tolerance_ratio(ratio: f64) -> RiskBand {
    if ratio < RATIO_BORDERLINE {
        RiskBand::WithinTolerance
    } else if ratio < RATIO_EXCEEDED {
        RiskBand::Borderline
    } else {
        RiskBand::AboveTolerance
    }
}

/// Cumulative result of a two-course assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CumulativeAssessment {
    /// Recovery-adjusted first-course BED [Gy].
    pub effective_rt1_bed_gy: f64,
    /// Unadjusted second-course BED [Gy].
    pub rt2_bed_gy: f64,
    /// Combined, penalty-adjusted BED [Gy].
    pub cumulative_bed_gy: f64,
    /// Cumulative BED in 2 Gy-fraction equivalent [Gy].
    pub cumulative_eqd2_gy: f64,
    /// `cumulative_eqd2 / tolerance_dose`; present iff a tolerance exists.
    pub tolerance_ratio: Option<f64>,
    pub risk_band: RiskBand,
}

/// Combine two courses into a cumulative assessment.
///
/// RT1's BED is first discounted by the recovery outcome, the overlap
/// policy then merges it with RT2's BED, and the result is normalized to
/// EQD2 with the session ratio. Without a tolerance dose the band is
/// [`RiskBand::NotApplicable`] and no ratio is formed.
pub fn assess(
    rt1: &DoseMetrics,
    rt2: &DoseMetrics,
    recovery: RecoveryOutcome,
    policy: OverlapPolicy,
    alpha_beta_gy: f64,
    tolerance_dose_gy: Option<f64>,
) -> CumulativeAssessment {
    let effective_rt1_bed_gy = rt1.bed_gy * recovery.remaining_fraction;
    let cumulative_bed_gy = policy.combine_bed(effective_rt1_bed_gy, rt2.bed_gy);
    let cumulative_eqd2_gy = eqd2_from_bed(cumulative_bed_gy, alpha_beta_gy);

    let (tolerance_ratio, risk_band) = match tolerance_dose_gy {
        Some(limit) if limit > 0.0 => {
            let ratio = cumulative_eqd2_gy / limit;
            (Some(ratio), classify_tolerance_ratio(ratio))
        }
        _ => (None, RiskBand::NotApplicable),
    };

    CumulativeAssessment {
        effective_rt1_bed_gy,
        rt2_bed_gy: rt2.bed_gy,
        cumulative_bed_gy,
        cumulative_eqd2_gy,
        tolerance_ratio,
        risk_band,
    }
}
