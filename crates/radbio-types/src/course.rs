// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Treatment Course
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Treatment-course value type shared by all engine modules.

use serde::{Deserialize, Serialize};

/// One fractionated treatment course as supplied by the input boundary.
///
/// Carries no identity beyond its role (first or second course). The form
/// layer guarantees `total_dose_gy >= 0` and `fraction_count >= 1`; a
/// zero fraction count is still representable and handled by the engine's
/// degenerate-input fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreatmentCourse {
    /// Prescribed total dose [Gy].
    pub total_dose_gy: f64,
    /// Number of fractions delivering the total dose.
    pub fraction_count: u32,
}

impl TreatmentCourse {
    pub fn new(total_dose_gy: f64, fraction_count: u32) -> Self {
        TreatmentCourse {
            total_dose_gy,
            fraction_count,
        }
    }

    /// Dose per fraction [Gy]. Zero for a degenerate fraction count.
    pub fn dose_per_fraction_gy(&self) -> f64 {
        if self.fraction_count == 0 {
            return 0.0;
        }
        self.total_dose_gy / self.fraction_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_per_fraction() {
        let course = TreatmentCourse::new(45.0, 25);
        assert!((course.dose_per_fraction_gy() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_fractions_no_division() {
        let course = TreatmentCourse::new(45.0, 0);
        assert_eq!(course.dose_per_fraction_gy(), 0.0);
    }
}
