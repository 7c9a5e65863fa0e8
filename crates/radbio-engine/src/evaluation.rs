// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Evaluation Dispatch
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One user-triggered recomputation, end to end.
//!
//! The form layer resolves tissue selection and manual overrides down to a
//! final session ratio and tolerance before calling in; the engine has no
//! concept of "overridden". Dispatch is on the request variant, not a mode
//! flag threaded through the calculators.

use crate::cumulative::{assess, CumulativeAssessment};
use crate::dose::{compute_dose_metrics, DoseMetrics};
use crate::overlap::OverlapPolicy;
use crate::recovery::{RecoveryMode, RecoveryOutcome};
use radbio_types::config::TissueReference;
use radbio_types::course::TreatmentCourse;
use serde::Serialize;

/// Boundary-resolved inputs valid for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionParams {
    /// Final alpha/beta ratio [Gy], default or manually overridden.
    pub alpha_beta_gy: f64,
    /// Tolerance dose [Gy] of the selected structure, if constrained.
    pub tolerance_dose_gy: Option<f64>,
    /// Apply the LQL correction to course A. Caller's choice per course;
    /// never engaged automatically.
    pub high_dose_correction_a: bool,
    /// Apply the LQL correction to course B.
    pub high_dose_correction_b: bool,
}

impl SessionParams {
    /// Session defaults for a selected tissue, corrections off.
    pub fn for_tissue(tissue: &TissueReference) -> Self {
        SessionParams {
            alpha_beta_gy: tissue.alpha_beta_gy,
            tolerance_dose_gy: tissue.tolerance_dose_gy,
            high_dose_correction_a: false,
            high_dose_correction_b: false,
        }
    }
}

/// Calculation mode plus everything that mode needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationRequest {
    /// Side-by-side comparison of two independent schedules.
    Standard {
        course_a: TreatmentCourse,
        course_b: TreatmentCourse,
    },
    /// Re-irradiation: course A is prior treatment, course B the new plan.
    Reirradiation {
        course_a: TreatmentCourse,
        course_b: TreatmentCourse,
        recovery_mode: RecoveryMode,
        /// Elapsed time between courses [months]; ignored under
        /// full-summation recovery.
        interval_months: f64,
        overlap: OverlapPolicy,
    },
}

/// Everything the display layer needs from one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub metrics_a: DoseMetrics,
    pub metrics_b: DoseMetrics,
    /// Present only for re-irradiation requests.
    pub cumulative: Option<CumulativeAssessment>,
}

impl EvaluationReport {
    /// Plain labeled Gy values for rendering, in display order.
    ///
    /// Includes the raw intermediates (effective RT1 BED, RT2 BED) needed
    /// for a stacked or grouped chart; deliberately not a rendering
    /// structure.
    pub fn labeled_values(&self) -> Vec<(&'static str, f64)> {
        let mut values = vec![
            ("Dose per Fraction A", self.metrics_a.dose_per_fraction_gy),
            ("BED A", self.metrics_a.bed_gy),
            ("EQD2 A", self.metrics_a.eqd2_gy),
            ("Dose per Fraction B", self.metrics_b.dose_per_fraction_gy),
            ("BED B", self.metrics_b.bed_gy),
            ("EQD2 B", self.metrics_b.eqd2_gy),
        ];
        if let Some(c) = &self.cumulative {
            values.push(("Effective RT1 BED", c.effective_rt1_bed_gy));
            values.push(("RT2 BED", c.rt2_bed_gy));
            values.push(("Cumulative BED", c.cumulative_bed_gy));
            values.push(("Cumulative EQD2", c.cumulative_eqd2_gy));
            if let Some(ratio) = c.tolerance_ratio {
                values.push(("Tolerance Ratio", ratio));
            }
        }
        values
    }
}

/// Run one evaluation. Pure and idempotent: identical inputs always give
/// identical output.
pub fn evaluate(request: &EvaluationRequest, params: &SessionParams) -> EvaluationReport {
    match *request {
        EvaluationRequest::Standard { course_a, course_b } => EvaluationReport {
            metrics_a: compute_dose_metrics(
                &course_a,
                params.alpha_beta_gy,
                params.high_dose_correction_a,
            ),
            metrics_b: compute_dose_metrics(
                &course_b,
                params.alpha_beta_gy,
                params.high_dose_correction_b,
            ),
            cumulative: None,
        },
        EvaluationRequest::Reirradiation {
            course_a,
            course_b,
            recovery_mode,
            interval_months,
            overlap,
        } => {
            let metrics_a = compute_dose_metrics(
                &course_a,
                params.alpha_beta_gy,
                params.high_dose_correction_a,
            );
            let metrics_b = compute_dose_metrics(
                &course_b,
                params.alpha_beta_gy,
                params.high_dose_correction_b,
            );
            let recovery = RecoveryOutcome::evaluate(recovery_mode, interval_months);
            let cumulative = assess(
                &metrics_a,
                &metrics_b,
                recovery,
                overlap,
                params.alpha_beta_gy,
                params.tolerance_dose_gy,
            );
            EvaluationReport {
                metrics_a,
                metrics_b,
                cumulative: Some(cumulative),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cumulative::RiskBand;
    use crate::overlap::{OverlapLevel, PenaltyMode};
    use radbio_types::config::ClinicalDatabase;

    fn lung_session() -> SessionParams {
        // Lung (Healthy Tissue): alpha/beta 3, tolerance 20 Gy mean.
        let db = ClinicalDatabase::builtin();
        SessionParams::for_tissue(db.get("Lung (Healthy Tissue)").unwrap())
    }

    #[test]
    fn test_standard_mode_has_no_cumulative() {
        let request = EvaluationRequest::Standard {
            course_a: TreatmentCourse::new(45.0, 25),
            course_b: TreatmentCourse::new(30.0, 10),
        };
        let report = evaluate(&request, &lung_session());
        assert!(report.cumulative.is_none());
        assert!((report.metrics_a.bed_gy - 72.0).abs() < 1e-9);
        assert!((report.metrics_b.bed_gy - 60.0).abs() < 1e-9);
        assert_eq!(report.labeled_values().len(), 6);
    }

    #[test]
    fn test_reirradiation_pipeline() {
        // All at alpha/beta 3: BED_A = 45*(1+1.8/3) = 72, BED_B = 60.
        // 12 months -> remaining 0.50 -> effective RT1 = 36.
        // Partial overlap on the sum: (36+60)*1.15 = 110.4;
        // EQD2 = 110.4/(5/3) = 66.24; ratio vs 45 Gy = 1.472.
        let request = EvaluationRequest::Reirradiation {
            course_a: TreatmentCourse::new(45.0, 25),
            course_b: TreatmentCourse::new(30.0, 10),
            recovery_mode: RecoveryMode::TimeBased,
            interval_months: 12.0,
            overlap: OverlapPolicy::with_overlap(OverlapLevel::Partial, PenaltyMode::CumulativeSum),
        };
        let params = SessionParams {
            alpha_beta_gy: 3.0,
            tolerance_dose_gy: Some(45.0),
            high_dose_correction_a: false,
            high_dose_correction_b: false,
        };
        let report = evaluate(&request, &params);
        let c = report.cumulative.unwrap();
        assert!((c.effective_rt1_bed_gy - 36.0).abs() < 1e-9);
        assert!((c.cumulative_bed_gy - 110.4).abs() < 1e-9);
        assert!((c.cumulative_eqd2_gy - 66.24).abs() < 1e-9);
        assert_eq!(c.risk_band, RiskBand::AboveTolerance);
    }

    #[test]
    fn test_idempotent_recomputation() {
        let request = EvaluationRequest::Reirradiation {
            course_a: TreatmentCourse::new(50.0, 25),
            course_b: TreatmentCourse::new(24.0, 3),
            recovery_mode: RecoveryMode::TimeBased,
            interval_months: 30.0,
            overlap: OverlapPolicy::with_overlap(OverlapLevel::High, PenaltyMode::FirstCourseOnly),
        };
        let params = lung_session();
        assert_eq!(evaluate(&request, &params), evaluate(&request, &params));
    }

    #[test]
    fn test_labeled_values_carry_intermediates() {
        let request = EvaluationRequest::Reirradiation {
            course_a: TreatmentCourse::new(45.0, 25),
            course_b: TreatmentCourse::new(30.0, 10),
            recovery_mode: RecoveryMode::FullSummation,
            interval_months: 0.0,
            overlap: OverlapPolicy::none(),
        };
        let report = evaluate(&request, &lung_session());
        let labels: Vec<_> = report.labeled_values().iter().map(|(l, _)| *l).collect();
        assert!(labels.contains(&"Effective RT1 BED"));
        assert!(labels.contains(&"RT2 BED"));
        assert!(labels.contains(&"Cumulative EQD2"));
        assert!(labels.contains(&"Tolerance Ratio"));
    }
}
