//! # Structural Calculations
//!
//! This module contains the slab calculation. It follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, table) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`slab`] - Simply supported one-way slab design
//! - [`reinforcement`] - Bar size and spacing selection, used by [`slab`]

pub mod reinforcement;
pub mod slab;

// Re-export commonly used types
pub use reinforcement::{select_reinforcement, BarCandidate, ReinforcementSelection};
pub use slab::{calculate, compute_slab_design, LeverArmBranch, SlabInput, SlabResult};
