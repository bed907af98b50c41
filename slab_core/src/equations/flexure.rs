//! # Flexural Design Formulas
//!
//! Ultimate limit state equations for a singly reinforced rectangular
//! section, following the simplified BS 8110-1 design procedure.
//!
//! ## Notation
//!
//! - `gk`, `qk` = Characteristic dead and imposed area loads (kN/m²)
//! - `n` = Ultimate design load (kN/m²)
//! - `L` = Span (m)
//! - `M` = Design moment per meter width (kN·m)
//! - `h` = Overall slab depth (mm)
//! - `d` = Effective depth (mm)
//! - `b` = Section width (mm), a 1000 mm strip
//! - `z` = Lever arm (mm)
//! - `fck`, `fy` = Concrete and steel characteristic strengths (MPa)
//!
//! ## References
//!
//! - BS 8110-1:1997 Clause 2.4.3 (load factors), Clause 3.4.4.4 (design formulae)
//! - BS 8110-1:1997 Table 3.25 (minimum reinforcement)

use crate::materials::BarSize;

/// Partial load factor on dead load
pub const DEAD_LOAD_FACTOR: f64 = 1.4;

/// Partial load factor on imposed load
pub const LIVE_LOAD_FACTOR: f64 = 1.6;

/// Width of the design strip (mm)
pub const STRIP_WIDTH_MM: f64 = 1000.0;

/// Span/depth ratio used to size the slab
pub const DEPTH_ESTIMATE_RATIO: f64 = 25.0;

/// Slab depths are chosen in multiples of this increment (mm)
pub const DEPTH_INCREMENT_MM: f64 = 25.0;

/// Bar assumed when locating the tension steel
pub const ASSUMED_BAR: BarSize = BarSize::Y12;

/// Diameter of [`ASSUMED_BAR`] (mm)
pub const ASSUMED_BAR_DIAMETER_MM: f64 = ASSUMED_BAR.diameter_mm();

/// Singly reinforced limit K′ (moment redistribution ≤ 10%)
pub const K_PRIME: f64 = 0.156;

/// Upper bound on the lever arm as a fraction of d
pub const LEVER_ARM_CAP: f64 = 0.95;

/// Minimum tension steel as a fraction of bh
pub const MIN_STEEL_RATIO: f64 = 0.0013;

/// Ultimate area load n = 1.4gk + 1.6qk
///
/// # Example
/// ```rust
/// use slab_core::equations::flexure::ultimate_load;
///
/// assert!((ultimate_load(3.0, 2.0) - 7.4).abs() < 1e-12);
/// ```
#[inline]
pub fn ultimate_load(dead_kn_m2: f64, live_kn_m2: f64) -> f64 {
    DEAD_LOAD_FACTOR * dead_kn_m2 + LIVE_LOAD_FACTOR * live_kn_m2
}

/// Mid-span moment of a simply supported strip, M = nL²/8
///
/// ```text
///    ↓ ↓ ↓ ↓ ↓ ↓ ↓ ↓  n
///    ════════════════
///    △              △
///    ←──────L──────→
/// ```
#[inline]
pub fn simply_supported_moment(ultimate_kn_m2: f64, span_m: f64) -> f64 {
    ultimate_kn_m2 * span_m.powi(2) / 8.0
}

/// Span/25 depth target (mm)
#[inline]
pub fn estimated_depth_mm(span_mm: f64) -> f64 {
    span_mm / DEPTH_ESTIMATE_RATIO
}

/// Round a depth up to the next 25 mm increment
///
/// Never under-estimates: `rounded_slab_depth_mm(x) >= x`.
///
/// ```rust
/// use slab_core::equations::flexure::rounded_slab_depth_mm;
///
/// assert_eq!(rounded_slab_depth_mm(160.0), 175.0);
/// assert_eq!(rounded_slab_depth_mm(175.0), 175.0);
/// ```
#[inline]
pub fn rounded_slab_depth_mm(estimated_mm: f64) -> f64 {
    (estimated_mm / DEPTH_INCREMENT_MM).ceil() * DEPTH_INCREMENT_MM
}

/// Effective depth d = h - cover - φ/2
///
/// Not clamped; a non-positive result is left for the caller to reject.
#[inline]
pub fn effective_depth_mm(slab_depth_mm: f64, cover_mm: f64, bar_diameter_mm: f64) -> f64 {
    slab_depth_mm - cover_mm - bar_diameter_mm / 2.0
}

/// Normalized moment K = M/(bd²fck)
///
/// # Arguments
/// * `moment_nmm` - Design moment in N·mm
/// * `b_mm` - Section width
/// * `d_mm` - Effective depth
/// * `fck_mpa` - Concrete strength
#[inline]
pub fn k_factor(moment_nmm: f64, b_mm: f64, d_mm: f64, fck_mpa: f64) -> f64 {
    moment_nmm / (b_mm * d_mm.powi(2) * fck_mpa)
}

/// Lever arm z = d[0.5 + √(0.25 - K/1.134)] ≤ 0.95d
///
/// Only valid for K ≤ K′; the radicand stays positive in that range.
#[inline]
pub fn lever_arm_mm(d_mm: f64, k: f64) -> f64 {
    let z = d_mm * (0.5 + (0.25 - k / 1.134).sqrt());
    z.min(LEVER_ARM_CAP * d_mm)
}

/// Simplified lever arm used when K exceeds K′
#[inline]
pub fn fallback_lever_arm_mm(d_mm: f64) -> f64 {
    LEVER_ARM_CAP * d_mm
}

/// Tension steel As = M/(0.87fy·z) in mm² per strip
#[inline]
pub fn required_steel_area_mm2(moment_nmm: f64, fy_mpa: f64, z_mm: f64) -> f64 {
    moment_nmm / (0.87 * fy_mpa * z_mm)
}

/// Minimum tension steel As,min = 0.0013bh
#[inline]
pub fn minimum_steel_area_mm2(b_mm: f64, h_mm: f64) -> f64 {
    MIN_STEEL_RATIO * b_mm * h_mm
}
