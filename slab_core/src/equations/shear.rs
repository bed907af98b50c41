//! # Shear Resistance Without Shear Links
//!
//! Design shear stress and the concrete shear strength vc of a slab strip,
//! simplified from BS 8110-1 Table 3.8.
//!
//! ## Notation
//!
//! - `V` = Support shear per meter width (kN)
//! - `v` = Design shear stress V/(bd) (MPa)
//! - `ρ` = 100As/(bd), tension reinforcement percentage
//! - `vc` = Design concrete shear stress (MPa)

/// Partial safety factor on concrete in shear
pub const GAMMA_M_SHEAR: f64 = 1.25;

/// vc used when there is no tension steel to rely on (MPa)
pub const FALLBACK_SHEAR_STRENGTH_MPA: f64 = 0.4;

/// Support reaction of a simply supported strip, V = nL/2
#[inline]
pub fn support_shear_kn(ultimate_kn_m2: f64, span_m: f64) -> f64 {
    ultimate_kn_m2 * span_m / 2.0
}

/// Design shear stress v = V/(bd)
///
/// # Arguments
/// * `shear_n` - Shear force in newtons
#[inline]
pub fn shear_stress_mpa(shear_n: f64, b_mm: f64, d_mm: f64) -> f64 {
    shear_n / (b_mm * d_mm)
}

/// Tension reinforcement percentage ρ = 100As/(bd)
#[inline]
pub fn reinforcement_ratio(area_mm2: f64, b_mm: f64, d_mm: f64) -> f64 {
    100.0 * area_mm2 / (b_mm * d_mm)
}

/// Concrete shear strength
///
/// ```text
/// vc = 0.79 ρ^(1/3) (400/d)^(1/4) / 1.25  ≤ 0.8√fck
/// ```
pub fn concrete_shear_strength_mpa(rho: f64, d_mm: f64, fck_mpa: f64) -> f64 {
    let vc = 0.79 * rho.powf(1.0 / 3.0) * (400.0 / d_mm).powf(0.25) / GAMMA_M_SHEAR;
    vc.min(0.8 * fck_mpa.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_shear() {
        assert!((support_shear_kn(7.4, 4.0) - 14.8).abs() < 1e-12);
    }

    #[test]
    fn test_shear_stress() {
        let v = shear_stress_mpa(14_800.0, 1000.0, 144.0);
        assert!((v - 0.10278).abs() < 1e-5);
    }

    #[test]
    fn test_concrete_shear_strength() {
        let rho = reinforcement_ratio(270.33, 1000.0, 144.0);
        assert!((rho - 0.18773).abs() < 1e-5);
        let vc = concrete_shear_strength_mpa(rho, 144.0, 25.0);
        assert!((vc - 0.467).abs() < 0.001);
    }

    #[test]
    fn test_concrete_shear_strength_capped() {
        // Huge steel percentage on a shallow section hits the 0.8√fck ceiling
        let vc = concrete_shear_strength_mpa(500.0, 20.0, 25.0);
        assert_eq!(vc, 4.0);
    }
}
