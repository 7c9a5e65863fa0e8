// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — Clinical Reference Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Clinical reference database: tissue radiosensitivity and tolerance.
//!
//! Port of the `clinical_data` table (QUANTEC 2010, START trials, Fowler,
//! Emami). Loaded once at startup and injected into the engine as an
//! immutable table; the engine never mutates or re-derives it.

use serde::{Deserialize, Serialize};

/// Clinical quantity a tissue's dose limit is conventionally reported
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToleranceMetric {
    /// Point maximum dose (serial organs such as spinal cord).
    PointMax,
    /// Mean organ dose (parallel organs such as parotid or liver).
    Mean,
    /// Volume receiving a threshold dose (Vxx-style limits).
    VolumeThreshold,
    /// Approximation standing in for a composite clinical endpoint.
    Surrogate,
    /// No conventional limit metric (tumor or unconstrained entries).
    None,
}

/// Reference entry for one organ or tissue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TissueReference {
    pub name: String,
    /// Alpha/beta ratio [Gy]. Always > 0 in reference data.
    pub alpha_beta_gy: f64,
    /// Citation label shown when the default ratio is in use.
    pub source: String,
    /// Cumulative tolerance dose [Gy], absent for tumor or unconstrained
    /// entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_dose_gy: Option<f64>,
    pub tolerance_metric: ToleranceMetric,
}

/// Immutable tissue lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalDatabase {
    pub tissues: Vec<TissueReference>,
}

fn entry(
    name: &str,
    alpha_beta_gy: f64,
    source: &str,
    tolerance_dose_gy: Option<f64>,
    tolerance_metric: ToleranceMetric,
) -> TissueReference {
    TissueReference {
        name: name.to_string(),
        alpha_beta_gy,
        source: source.to_string(),
        tolerance_dose_gy,
        tolerance_metric,
    }
}

impl ClinicalDatabase {
    /// Compiled-in reference table. Python: `clinical_data` dict.
    ///
    /// Tumor and generic entries carry no tolerance dose: the Python
    /// placeholder limit of 100 Gy (and tumor prescription doses) are not
    /// tolerance constraints and map to `None` here.
    pub fn builtin() -> Self {
        use ToleranceMetric::{Mean, PointMax, Surrogate, VolumeThreshold};
        ClinicalDatabase {
            tissues: vec![
                entry("OARs (General)", 3.0, "Generic Reference", None, ToleranceMetric::None),
                entry("Tumor (General)", 10.0, "Generic Reference", None, ToleranceMetric::None),
                entry("Spinal Cord", 2.0, "QUANTEC (2010)", Some(45.0), PointMax),
                entry("Brain (Healthy Tissue)", 3.0, "QUANTEC (2010)", Some(60.0), PointMax),
                entry("Heart", 3.0, "QUANTEC (2010)", Some(30.0), Mean),
                entry("Brainstem", 2.1, "QUANTEC (2010)", Some(54.0), PointMax),
                entry("Prostate (Tumor)", 1.5, "Fowler et al.", None, ToleranceMetric::None),
                entry("Breast (Tumor)", 4.0, "START Trials", None, ToleranceMetric::None),
                entry("Lung (Healthy Tissue)", 3.0, "QUANTEC / TG-166", Some(20.0), Mean),
                entry("Rectum", 3.0, "QUANTEC", Some(70.0), VolumeThreshold),
                entry("Bladder", 3.0, "QUANTEC", Some(70.0), VolumeThreshold),
                entry("Liver", 3.0, "QUANTEC", Some(30.0), Mean),
                entry("Kidney", 3.0, "QUANTEC", Some(18.0), Mean),
                entry("Esophagus", 10.0, "Emami/QUANTEC", Some(35.0), Surrogate),
                entry("Small Bowel", 10.0, "Emami/QUANTEC", Some(45.0), VolumeThreshold),
                entry("Parotid Glands", 3.0, "QUANTEC", Some(26.0), Mean),
                entry("Lung (NSCLC)", 10.0, "Generic Reference", None, ToleranceMetric::None),
            ],
        }
    }

    /// Load a reference table from a JSON file.
    pub fn from_file(path: &str) -> crate::error::RadbioResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let db: Self = serde_json::from_str(&contents)?;
        Ok(db)
    }

    /// Look up one tissue by display name.
    pub fn get(&self, name: &str) -> crate::error::RadbioResult<&TissueReference> {
        self.tissues
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| crate::error::RadbioError::UnknownTissue(name.to_string()))
    }

    pub fn tissue_names(&self) -> impl Iterator<Item = &str> {
        self.tissues.iter().map(|t| t.name.as_str())
    }
}
