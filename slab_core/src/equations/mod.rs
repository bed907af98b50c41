//! # Slab Design Equations
//!
//! This module contains the code equations used by the slab calculation.
//! Having equations in one place enables:
//! - Easy verification against the governing code clauses
//! - Documentation of assumptions and units
//! - Constants of the procedure kept next to the formulas that use them
//!
//! ## Modules
//!
//! - [`flexure`] - Loads, moment, section sizing, K, lever arm, steel areas
//! - [`serviceability`] - Span/depth deflection control
//! - [`shear`] - Shear stress and concrete shear strength
//!
//! ## Units
//!
//! Functions take plain `f64` values in the units named by their suffix
//! (`_mm`, `_m`, `_kn_m2`, `_nmm`, `_mpa`, `_mm2`). Section width is always
//! the 1000 mm design strip.
//!
//! ## References
//!
//! - BS 8110-1:1997 Structural use of concrete, Part 1

pub mod flexure;
pub mod serviceability;
pub mod shear;

pub use flexure::{
    effective_depth_mm,
    estimated_depth_mm,
    fallback_lever_arm_mm,
    k_factor,
    lever_arm_mm,
    minimum_steel_area_mm2,
    required_steel_area_mm2,
    rounded_slab_depth_mm,
    simply_supported_moment,
    ultimate_load,
};

pub use serviceability::{modification_factor, service_stress_mpa, span_depth_ratio};

pub use shear::{
    concrete_shear_strength_mpa,
    reinforcement_ratio,
    shear_stress_mpa,
    support_shear_kn,
};
