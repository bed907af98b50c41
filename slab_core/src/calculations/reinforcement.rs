//! # Reinforcement Selection
//!
//! Turns a provided steel area (mm² per meter width) into a buildable bar
//! arrangement. Every bar in the material table is tried; each gets a
//! practical spacing and the steel area that spacing actually delivers.
//!
//! ## Rules
//!
//! - Spacing is rounded down to a 25 mm increment, then kept within
//!   75-300 mm.
//! - A candidate is adequate when its delivered area covers As,req.
//! - The smallest adequate bar wins; with no adequate bar, the candidate
//!   delivering the most steel wins. Ties go to the earlier table entry.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::reinforcement::select_reinforcement;
//! use slab_core::materials::MaterialTable;
//!
//! let selection = select_reinforcement(MaterialTable::standard(), 500.0, 500.0).unwrap();
//! assert_eq!(selection.label, "Y8 @ 100mm c/c");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, MaterialTable};
use crate::units::round_dp;

/// Spacing increment for bar layouts (mm)
pub const SPACING_INCREMENT_MM: f64 = 25.0;

/// Closest practical spacing (mm)
pub const MIN_SPACING_MM: f64 = 75.0;

/// Widest permitted spacing (mm)
pub const MAX_SPACING_MM: f64 = 300.0;

/// One evaluated bar arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarCandidate {
    /// Bar designation
    pub bar_size: BarSize,

    /// Bar cross-section area (mm²)
    pub bar_area_mm2: f64,

    /// Practical center-to-center spacing (mm)
    pub spacing_mm: u32,

    /// Steel area delivered at that spacing (mm²/m)
    pub as_actual_mm2: f64,

    /// Delivered area covers the required area
    pub adequate: bool,
}

impl BarCandidate {
    /// Drawing label, e.g. "Y10 @ 200mm c/c"
    pub fn label(&self) -> String {
        format!("{} @ {}mm c/c", self.bar_size, self.spacing_mm)
    }
}

/// Outcome of the selection step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementSelection {
    /// Every candidate, in table order
    pub candidates: Vec<BarCandidate>,

    /// The chosen arrangement
    pub selected: BarCandidate,

    /// Label of the chosen arrangement
    pub label: String,

    /// At least one candidate was adequate
    pub any_adequate: bool,
}

/// Round a raw spacing down to the 25 mm grid and clamp to 75-300 mm
///
/// ```rust
/// use slab_core::calculations::reinforcement::practical_spacing_mm;
///
/// assert_eq!(practical_spacing_mm(186.1), 175);
/// assert_eq!(practical_spacing_mm(50.0), 75);
/// assert_eq!(practical_spacing_mm(1200.0), 300);
/// ```
pub fn practical_spacing_mm(raw_spacing_mm: f64) -> u32 {
    let stepped = (raw_spacing_mm / SPACING_INCREMENT_MM).floor() * SPACING_INCREMENT_MM;
    stepped.clamp(MIN_SPACING_MM, MAX_SPACING_MM) as u32
}

/// Full-precision evaluation kept alongside the stored candidate
struct Evaluated {
    candidate: BarCandidate,
    as_actual_mm2: f64,
}

fn evaluate(bar_size: BarSize, bar_area_mm2: f64, provided_mm2: f64, required_mm2: f64) -> Evaluated {
    let raw_spacing = bar_area_mm2 * 1000.0 / provided_mm2;
    let spacing_mm = practical_spacing_mm(raw_spacing);
    let as_actual_mm2 = bar_area_mm2 * 1000.0 / f64::from(spacing_mm);

    Evaluated {
        candidate: BarCandidate {
            bar_size,
            bar_area_mm2,
            spacing_mm,
            as_actual_mm2: round_dp(as_actual_mm2, 1),
            adequate: as_actual_mm2 >= required_mm2,
        },
        as_actual_mm2,
    }
}

/// Pick the smallest adequate bar, or the strongest candidate if none is adequate.
fn choose(evaluated: &[Evaluated]) -> Option<usize> {
    let mut smallest_adequate: Option<usize> = None;
    let mut strongest: Option<usize> = None;

    for (i, eval) in evaluated.iter().enumerate() {
        if eval.candidate.adequate {
            let better = smallest_adequate
                .map_or(true, |best| eval.candidate.bar_area_mm2 < evaluated[best].candidate.bar_area_mm2);
            if better {
                smallest_adequate = Some(i);
            }
        }

        let stronger = strongest.map_or(true, |best| eval.as_actual_mm2 > evaluated[best].as_actual_mm2);
        if stronger {
            strongest = Some(i);
        }
    }

    smallest_adequate.or(strongest)
}

/// Evaluate all bar sizes for a provided steel area and select one.
///
/// # Arguments
///
/// * `table` - Material table supplying bars in evaluation order
/// * `provided_mm2` - Area to lay out, max(As,req, As,min)
/// * `required_mm2` - Area each candidate must deliver to be adequate
///
/// # Errors
///
/// * `DegenerateGeometry` - `provided_mm2` is not a positive finite number
/// * `InvalidInput` - the table has no bars
pub fn select_reinforcement(
    table: &MaterialTable,
    provided_mm2: f64,
    required_mm2: f64,
) -> CalcResult<ReinforcementSelection> {
    if !(provided_mm2.is_finite() && provided_mm2 > 0.0) {
        return Err(CalcError::degenerate_geometry(
            "as_provided_mm2",
            provided_mm2,
            "Provided steel area must be positive to derive a bar spacing",
        ));
    }

    let evaluated: Vec<Evaluated> = table
        .bars()
        .iter()
        .map(|row| evaluate(row.bar, row.area_mm2, provided_mm2, required_mm2))
        .collect();

    let index = choose(&evaluated).ok_or_else(|| {
        CalcError::invalid_input("bars", "0", "Material table has no bar designations")
    })?;

    let any_adequate = evaluated.iter().any(|e| e.candidate.adequate);
    if !any_adequate {
        tracing::warn!(
            provided_mm2,
            required_mm2,
            "no bar arrangement delivers the required steel area"
        );
    }

    let selected = evaluated[index].candidate.clone();
    let label = selected.label();
    let candidates = evaluated.into_iter().map(|e| e.candidate).collect();

    Ok(ReinforcementSelection {
        candidates,
        selected,
        label,
        any_adequate,
    })
}
