//! # slab_core - One-Way Slab Design Engine
//!
//! `slab_core` designs simply supported one-way reinforced concrete slabs
//! following a fixed BS 8110 procedure: load combination, bending moment,
//! section sizing, reinforcement selection, then deflection and shear checks.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: One pure function takes input and returns the full result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Trusting**: Range checks on span, loads and cover belong to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::compute_slab_design;
//!
//! let result = compute_slab_design(4.0, 3.0, 2.0, "C25", "460", 25.0).unwrap();
//! assert_eq!(result.slab_depth_mm, 175);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("reinforcement_suggestion"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The slab calculation and bar selection
//! - [`equations`] - Code formulas and procedure constants
//! - [`materials`] - Concrete, steel and bar tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute_slab_design, SlabInput, SlabResult};
pub use errors::{CalcError, CalcResult, GradeKind};
pub use materials::{ConcreteGrade, MaterialTable, SteelGrade};
