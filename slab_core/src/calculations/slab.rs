//! # One-Way Slab Design
//!
//! Designs a simply supported one-way reinforced concrete slab, per meter
//! width, following the simplified BS 8110-1 procedure.
//!
//! ## Procedure
//!
//! 1. Ultimate load n = 1.4gk + 1.6qk
//! 2. Moment M = nL²/8
//! 3. Slab depth h from span/25, rounded up to 25 mm
//! 4. Effective depth d = h - cover - 6 (12 mm bar assumed)
//! 5. K = M/(bd²fck)
//! 6. Compare with K′ = 0.156 (advisory only, no compression steel design)
//! 7. Lever arm z
//! 8. As,req = M/(0.87fy·z)
//! 9. As,min = 0.0013bh, As,prov = max(As,req, As,min)
//! 10. Bar selection (see [`reinforcement`](super::reinforcement))
//! 11. Span/depth deflection check
//! 12. Shear check
//!
//! Every step runs for every input. Intermediate values keep full precision;
//! only the stored result fields are rounded.
//!
//! ## Trust Boundary
//!
//! The calculator does not range-check inputs (span, loads, cover). Callers
//! are expected to enforce sensible bounds. It does reject unknown grades
//! and geometry that would make the arithmetic meaningless (non-positive
//! slab or effective depth, non-finite values).
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, SlabInput};
//! use slab_core::materials::{ConcreteGrade, MaterialTable, SteelGrade};
//!
//! let input = SlabInput::new(4.0, 3.0, 2.0, ConcreteGrade::C25, SteelGrade::Grade460, 25.0);
//! let result = calculate(&input, MaterialTable::standard()).unwrap();
//!
//! assert_eq!(result.slab_depth_mm, 175);
//! assert_eq!(result.reinforcement_suggestion, "Y8 @ 175mm c/c");
//! println!("M = {} kN·m, pass: {}", result.moment_knm, result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::reinforcement::{select_reinforcement, BarCandidate};
use crate::equations::flexure::{
    self, ASSUMED_BAR_DIAMETER_MM, DEAD_LOAD_FACTOR, K_PRIME, LIVE_LOAD_FACTOR, STRIP_WIDTH_MM,
};
use crate::equations::serviceability::{self, BASIC_SPAN_DEPTH_RATIO, NEUTRAL_MODIFICATION_FACTOR};
use crate::equations::shear::{self, FALLBACK_SHEAR_STRENGTH_MPA};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConcreteGrade, MaterialTable, SteelGrade};
use crate::units::{round_dp, KiloNewtons, KnM, Meters, Millimeters, NMm, Newtons};

/// Input parameters for a one-way slab.
///
/// ## JSON Example
///
/// ```json
/// {
///   "span_m": 4.0,
///   "dead_load_kn_m2": 3.0,
///   "live_load_kn_m2": 2.0,
///   "concrete_grade": "C25",
///   "steel_grade": "460",
///   "cover_mm": 25.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabInput {
    /// Clear span in meters
    pub span_m: f64,

    /// Characteristic dead load gk (kN/m²)
    pub dead_load_kn_m2: f64,

    /// Characteristic imposed load qk (kN/m²)
    pub live_load_kn_m2: f64,

    /// Concrete strength class
    pub concrete_grade: ConcreteGrade,

    /// Reinforcement steel grade
    pub steel_grade: SteelGrade,

    /// Nominal cover to the tension steel (mm)
    pub cover_mm: f64,
}

impl SlabInput {
    pub fn new(
        span_m: f64,
        dead_load_kn_m2: f64,
        live_load_kn_m2: f64,
        concrete_grade: ConcreteGrade,
        steel_grade: SteelGrade,
        cover_mm: f64,
    ) -> Self {
        SlabInput {
            span_m,
            dead_load_kn_m2,
            live_load_kn_m2,
            concrete_grade,
            steel_grade,
            cover_mm,
        }
    }

    /// Build an input from grade keys as typed on a form ("C25", "460").
    ///
    /// Fails with `UnknownGrade` for keys outside the material tables.
    pub fn from_codes(
        span_m: f64,
        dead_load_kn_m2: f64,
        live_load_kn_m2: f64,
        concrete_grade: &str,
        steel_grade: &str,
        cover_mm: f64,
    ) -> CalcResult<Self> {
        Ok(SlabInput::new(
            span_m,
            dead_load_kn_m2,
            live_load_kn_m2,
            ConcreteGrade::from_code(concrete_grade)?,
            SteelGrade::from_code(steel_grade)?,
            cover_mm,
        ))
    }

    fn check_finite(&self) -> CalcResult<()> {
        let fields = [
            ("span_m", self.span_m),
            ("dead_load_kn_m2", self.dead_load_kn_m2),
            ("live_load_kn_m2", self.live_load_kn_m2),
            ("cover_mm", self.cover_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(CalcError::degenerate_geometry(name, value, "Value must be a finite number"));
            }
        }
        Ok(())
    }
}

/// Which lever arm expression produced z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeverArmBranch {
    /// z = d[0.5 + √(0.25 - K/1.134)] ≤ 0.95d, used when K ≤ K′
    Formula,
    /// z = 0.95d, used when K > K′
    Simplified,
}

/// Results from the slab calculation.
///
/// Values are rounded for presentation as noted on each field.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "ultimate_load_kn_m2": 7.4,
///   "moment_knm": 14.8,
///   "slab_depth_mm": 175,
///   "effective_depth_mm": 144.0,
///   "k_value": 0.0285,
///   "compression_reinforcement_needed": false,
///   "as_provided_mm2": 270.3,
///   "reinforcement_suggestion": "Y8 @ 175mm c/c",
///   "deflection_ok": true,
///   "shear_ok": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    // === Inputs (echoed) ===
    pub span_m: f64,
    pub dead_load_kn_m2: f64,
    pub live_load_kn_m2: f64,
    pub concrete_grade: ConcreteGrade,
    pub steel_grade: SteelGrade,
    pub cover_mm: f64,

    // === Material Properties Used ===
    /// Characteristic concrete strength fck (MPa)
    pub fck_mpa: f64,
    /// Concrete tensile strength fctm (MPa)
    pub fctm_mpa: f64,
    /// Steel yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Steel elastic modulus Es (MPa)
    pub es_mpa: f64,

    // === Loads and Moment ===
    pub load_factor_dead: f64,
    pub load_factor_live: f64,
    /// Ultimate load n (kN/m², 2 dp)
    pub ultimate_load_kn_m2: f64,
    /// Design moment per meter width (kN·m, 2 dp)
    pub moment_knm: f64,

    // === Section ===
    /// Span/25 depth target (mm, 1 dp)
    pub estimated_depth_mm: f64,
    /// Chosen overall depth, a multiple of 25 mm
    pub slab_depth_mm: u32,
    pub assumed_bar_diameter_mm: f64,
    /// Effective depth d (mm, 1 dp)
    pub effective_depth_mm: f64,

    // === Flexure ===
    /// K = M/(bd²fck) (4 dp)
    pub k_value: f64,
    pub k_prime: f64,
    /// K exceeds K′; advisory, no compression steel is designed
    pub compression_reinforcement_needed: bool,
    /// Lever arm z (mm, 1 dp)
    pub lever_arm_mm: f64,
    pub lever_arm_branch: LeverArmBranch,
    /// Required tension steel (mm²/m, 1 dp)
    pub as_required_mm2: f64,
    /// Minimum tension steel (mm²/m, 1 dp)
    pub as_min_mm2: f64,
    /// max(As,req, As,min) (mm²/m, 1 dp)
    pub as_provided_mm2: f64,

    // === Reinforcement ===
    /// Every evaluated bar arrangement, in table order
    pub reinforcement_options: Vec<BarCandidate>,
    pub selected_reinforcement: BarCandidate,
    /// e.g. "Y10 @ 200mm c/c"
    pub reinforcement_suggestion: String,

    // === Deflection ===
    pub basic_span_depth_ratio: f64,
    /// Tension steel modification factor (2 dp)
    pub modification_factor: f64,
    /// Basic ratio × modification factor (1 dp)
    pub allowable_span_depth: f64,
    /// L/h (1 dp)
    pub actual_span_depth: f64,
    pub deflection_ok: bool,

    // === Shear ===
    /// Support shear per meter width (kN, 2 dp)
    pub shear_force_kn: f64,
    /// Design shear stress v = V/(bd) (MPa, 3 dp)
    pub shear_stress_mpa: f64,
    /// Concrete shear strength vc (MPa, 2 dp)
    pub concrete_shear_strength_mpa: f64,
    pub shear_ok: bool,
}

impl SlabResult {
    /// Check if the design is complete: singly reinforced, adequate bars,
    /// deflection and shear satisfied
    pub fn passes(&self) -> bool {
        self.failed_checks().is_empty()
    }

    /// Names of the checks this design does not satisfy
    pub fn failed_checks(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.compression_reinforcement_needed {
            failed.push("Flexure (K > K')");
        }
        if !self.selected_reinforcement.adequate {
            failed.push("Reinforcement");
        }
        if !self.deflection_ok {
            failed.push("Deflection");
        }
        if !self.shear_ok {
            failed.push("Shear");
        }
        failed
    }
}

/// Design a one-way slab from grade keys.
///
/// Convenience wrapper over [`calculate`] using the standard material table.
///
/// # Errors
///
/// * `UnknownGrade` - a grade key is not in the material tables
/// * `DegenerateGeometry` - the section collapses (e.g., cover exceeds depth)
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::slab::compute_slab_design;
///
/// let result = compute_slab_design(4.0, 3.0, 2.0, "C25", "460", 25.0).unwrap();
/// assert_eq!(result.moment_knm, 14.8);
///
/// let err = compute_slab_design(4.0, 3.0, 2.0, "C99", "460", 25.0).unwrap_err();
/// assert_eq!(err.error_code(), "UNKNOWN_GRADE");
/// ```
pub fn compute_slab_design(
    span_m: f64,
    dead_load_kn_m2: f64,
    live_load_kn_m2: f64,
    concrete_grade: &str,
    steel_grade: &str,
    cover_mm: f64,
) -> CalcResult<SlabResult> {
    let input = SlabInput::from_codes(span_m, dead_load_kn_m2, live_load_kn_m2, concrete_grade, steel_grade, cover_mm)?;
    calculate(&input, MaterialTable::standard())
}

/// Run the full slab design procedure.
///
/// This is a pure function: the same input and table always give the same result.
///
/// # Arguments
///
/// * `input` - Span, loads, grades and cover
/// * `table` - Material table to read strengths and bar areas from
///
/// # Returns
///
/// * `Ok(SlabResult)` - Every intermediate and final quantity
/// * `Err(CalcError)` - No partial result is ever returned
#[tracing::instrument(
    skip(table),
    fields(span_m = input.span_m, concrete = %input.concrete_grade, steel = %input.steel_grade)
)]
pub fn calculate(input: &SlabInput, table: &MaterialTable) -> CalcResult<SlabResult> {
    let concrete = table.concrete(input.concrete_grade)?;
    let steel = table.steel(input.steel_grade)?;
    input.check_finite()?;

    let fck = concrete.fck_mpa;
    let fy = steel.fy_mpa;
    if fck <= 0.0 || fy <= 0.0 {
        return Err(CalcError::invalid_input(
            "material",
            format!("fck={}, fy={}", fck, fy),
            "Material strengths must be positive",
        ));
    }

    let b = STRIP_WIDTH_MM;
    let span_mm: Millimeters = Meters(input.span_m).into();

    // === Step 1-2: Loads and Moment ===
    let ultimate = flexure::ultimate_load(input.dead_load_kn_m2, input.live_load_kn_m2);
    let moment = KnM(flexure::simply_supported_moment(ultimate, input.span_m));
    let moment_nmm: NMm = moment.into();
    tracing::debug!(ultimate, moment_knm = moment.0, "load combination");

    // === Step 3-4: Section Sizing ===
    let estimated_depth = flexure::estimated_depth_mm(span_mm.0);
    let slab_depth = flexure::rounded_slab_depth_mm(estimated_depth);
    if slab_depth <= 0.0 {
        return Err(CalcError::degenerate_geometry(
            "slab_depth_mm",
            slab_depth,
            "Span yields no slab depth",
        ));
    }
    let slab_depth_mm = u32::try_from(slab_depth as u64).map_err(|_| {
        CalcError::degenerate_geometry("slab_depth_mm", slab_depth, "Slab depth exceeds the representable range")
    })?;

    let d = flexure::effective_depth_mm(slab_depth, input.cover_mm, ASSUMED_BAR_DIAMETER_MM);
    if d <= 0.0 {
        return Err(CalcError::degenerate_geometry(
            "effective_depth_mm",
            d,
            "Cover and bar allowance consume the whole slab depth",
        ));
    }
    tracing::debug!(estimated_depth, slab_depth, effective_depth = d, "section sized");

    // === Step 5-7: K and Lever Arm ===
    let k = flexure::k_factor(moment_nmm.0, b, d, fck);
    let compression_needed = k > K_PRIME;
    let (z, branch) = if compression_needed {
        tracing::warn!(k, k_prime = K_PRIME, "K exceeds K', compression reinforcement advised");
        (flexure::fallback_lever_arm_mm(d), LeverArmBranch::Simplified)
    } else {
        (flexure::lever_arm_mm(d, k), LeverArmBranch::Formula)
    };

    // === Step 8-9: Steel Areas ===
    let as_required = flexure::required_steel_area_mm2(moment_nmm.0, fy, z);
    let as_min = flexure::minimum_steel_area_mm2(b, slab_depth);
    let as_provided = as_required.max(as_min);
    tracing::debug!(k, z, as_required, as_min, as_provided, "flexural steel");

    // === Step 10: Bar Selection ===
    let selection = select_reinforcement(table, as_provided, as_required)?;

    // === Step 11: Deflection ===
    let mf = if as_provided > 0.0 && as_required > 0.0 {
        let fs = serviceability::service_stress_mpa(fy, as_required, as_provided);
        serviceability::modification_factor(fs, moment_nmm.0, b, d)
    } else {
        NEUTRAL_MODIFICATION_FACTOR
    };
    let allowable_span_depth = BASIC_SPAN_DEPTH_RATIO * mf;
    let actual_span_depth = serviceability::span_depth_ratio(span_mm.0, slab_depth);
    let deflection_ok = actual_span_depth <= allowable_span_depth;

    // === Step 12: Shear ===
    let shear_kn = KiloNewtons(shear::support_shear_kn(ultimate, input.span_m));
    let vc = if as_provided > 0.0 {
        let rho = shear::reinforcement_ratio(as_provided, b, d);
        shear::concrete_shear_strength_mpa(rho, d, fck)
    } else {
        FALLBACK_SHEAR_STRENGTH_MPA
    };
    let v = shear::shear_stress_mpa(Newtons::from(shear_kn).0, b, d);
    let shear_ok = v <= vc;
    tracing::debug!(mf, deflection_ok, v, vc, shear_ok, "serviceability and shear");

    Ok(SlabResult {
        span_m: input.span_m,
        dead_load_kn_m2: input.dead_load_kn_m2,
        live_load_kn_m2: input.live_load_kn_m2,
        concrete_grade: input.concrete_grade,
        steel_grade: input.steel_grade,
        cover_mm: input.cover_mm,
        fck_mpa: fck,
        fctm_mpa: concrete.fctm_mpa,
        fy_mpa: fy,
        es_mpa: steel.es_mpa,
        load_factor_dead: DEAD_LOAD_FACTOR,
        load_factor_live: LIVE_LOAD_FACTOR,
        ultimate_load_kn_m2: round_dp(ultimate, 2),
        moment_knm: round_dp(moment.0, 2),
        estimated_depth_mm: round_dp(estimated_depth, 1),
        slab_depth_mm,
        assumed_bar_diameter_mm: ASSUMED_BAR_DIAMETER_MM,
        effective_depth_mm: round_dp(d, 1),
        k_value: round_dp(k, 4),
        k_prime: K_PRIME,
        compression_reinforcement_needed: compression_needed,
        lever_arm_mm: round_dp(z, 1),
        lever_arm_branch: branch,
        as_required_mm2: round_dp(as_required, 1),
        as_min_mm2: round_dp(as_min, 1),
        as_provided_mm2: round_dp(as_provided, 1),
        reinforcement_options: selection.candidates,
        selected_reinforcement: selection.selected,
        reinforcement_suggestion: selection.label,
        basic_span_depth_ratio: BASIC_SPAN_DEPTH_RATIO,
        modification_factor: round_dp(mf, 2),
        allowable_span_depth: round_dp(allowable_span_depth, 1),
        actual_span_depth: round_dp(actual_span_depth, 1),
        deflection_ok,
        shear_force_kn: round_dp(shear_kn.0, 2),
        shear_stress_mpa: round_dp(v, 3),
        concrete_shear_strength_mpa: round_dp(vc, 2),
        shear_ok,
    })
}
