// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Dose Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dose-metric calculator: BED and EQD2 for one fractionation schedule.
//!
//! Port of the per-schedule calculation block.
//! Python: `bed = D * (1 + d/ab)`, `eqd2 = bed / (1 + 2/ab)`.
//! The LQL high-dose branch caps the quadratic cell-kill term beyond
//! `dt = 2*ab` Gy per fraction, where the plain linear-quadratic model is
//! known to over-predict effect in stereotactic regimes.

use radbio_types::constants::EQD2_REFERENCE_DOSE_GY;
use radbio_types::course::TreatmentCourse;
use serde::Serialize;

/// Biological dose metrics for one treatment course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoseMetrics {
    /// Dose per fraction [Gy].
    pub dose_per_fraction_gy: f64,
    /// Biologically effective dose [Gy].
    pub bed_gy: f64,
    /// Equivalent dose in 2 Gy fractions [Gy].
    pub eqd2_gy: f64,
}

impl DoseMetrics {
    /// Zero-dose result, also the degenerate-input fallback.
    pub const ZERO: DoseMetrics = DoseMetrics {
        dose_per_fraction_gy: 0.0,
        bed_gy: 0.0,
        eqd2_gy: 0.0,
    };
}

/// LQL transition threshold `dt = 2 * alpha/beta` [Gy per fraction].
///
/// Depends on the ratio active for the session, not a fixed constant;
/// recompute whenever the selected tissue or a manual ratio changes.
pub fn lql_threshold_gy(alpha_beta_gy: f64) -> f64 {
    2.0 * alpha_beta_gy
}

/// Whether a course's dose per fraction exceeds the LQL threshold.
///
/// Eligibility only: the correction is never engaged automatically, the
/// caller decides per course whether to request it.
pub fn lql_eligible(course: &TreatmentCourse, alpha_beta_gy: f64) -> bool {
    course.fraction_count >= 1
        && alpha_beta_gy > 0.0
        && course.dose_per_fraction_gy() > lql_threshold_gy(alpha_beta_gy)
}

/// EQD2 normalization shared by the standard and corrected models.
pub fn eqd2_from_bed(bed_gy: f64, alpha_beta_gy: f64) -> f64 {
    bed_gy / (1.0 + EQD2_REFERENCE_DOSE_GY / alpha_beta_gy)
}

/// Compute BED and EQD2 for one course.
///
/// Standard model: `bed = D * (1 + d/ab)`. With `high_dose_correction`
/// set and `d > dt`, the per-fraction BED switches to the
/// linear-quadratic-linear form
/// `dt*(1 + dt/ab) + (d - dt)*(1 + 2*dt/ab)`, continuous at `d = dt`.
///
/// Degenerate input (zero fraction count, non-positive or non-finite
/// ratio) yields [`DoseMetrics::ZERO`] so a whole evaluation degrades to
/// "no dose delivered" instead of failing.
pub fn compute_dose_metrics(
    course: &TreatmentCourse,
    alpha_beta_gy: f64,
    high_dose_correction: bool,
) -> DoseMetrics {
    if course.fraction_count == 0 || !(alpha_beta_gy > 0.0) || !alpha_beta_gy.is_finite() {
        return DoseMetrics::ZERO;
    }

    let total_dose = course.total_dose_gy.max(0.0);
    let d = total_dose / course.fraction_count as f64;
    let dt = lql_threshold_gy(alpha_beta_gy);

    let bed = if high_dose_correction && d > dt {
        let bed_per_fraction =
            dt * (1.0 + dt / alpha_beta_gy) + (d - dt) * (1.0 + 2.0 * dt / alpha_beta_gy);
        bed_per_fraction * course.fraction_count as f64
    } else {
        total_dose * (1.0 + d / alpha_beta_gy)
    };

    DoseMetrics {
        dose_per_fraction_gy: d,
        bed_gy: bed,
        eqd2_gy: eqd2_from_bed(bed, alpha_beta_gy),
    }
}
