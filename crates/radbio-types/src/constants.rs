// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Reference dose per fraction for the EQD2 normalization [Gy].
/// A schedule delivered at exactly this dose per fraction is its own EQD2.
pub const EQD2_REFERENCE_DOSE_GY: f64 = 2.0;

/// Lower bound for the alpha/beta ratio accepted at the input boundary [Gy].
/// Python: min_value=0.1.
pub const AB_RATIO_MIN_GY: f64 = 0.1;

/// Upper bound for the alpha/beta ratio accepted at the input boundary [Gy].
/// Python: max_value=25.0.
pub const AB_RATIO_MAX_GY: f64 = 25.0;

/// Maximum modeled biological recovery fraction between courses.
/// Recovery saturates here for any interval of 24 months or more.
pub const RECOVERY_FRACTION_CAP: f64 = 0.65;
