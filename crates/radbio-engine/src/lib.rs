// ─────────────────────────────────────────────────────────────────────
// SCPN RadBio Core — RadBio Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radiobiological equivalence engine.
//!
//! Pure, stateless calculation layer: linear-quadratic BED/EQD2 with an
//! LQL high-dose correction, inter-course recovery, overlap penalties and
//! cumulative tolerance classification. Every function is total and
//! deterministic over its documented input domain; invalid inputs degrade
//! to zero-dose results rather than failing mid-evaluation.

pub mod cumulative;
pub mod dose;
pub mod evaluation;
pub mod overlap;
pub mod recovery;
