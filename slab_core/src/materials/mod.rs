//! # Materials Database
//!
//! Material definitions and property lookups for reinforced concrete slabs.
//!
//! ## Tables
//!
//! - **Concrete**: grade → (fck, fctm)
//! - **Steel**: grade → (fy, Es)
//! - **Bars**: designation → cross-section area, in ascending order
//!
//! The standard table is built once on first use and shared by reference;
//! nothing mutates it afterwards, so concurrent calculations need no locking.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{ConcreteGrade, MaterialTable, SteelGrade};
//!
//! let table = MaterialTable::standard();
//! let concrete = table.concrete(ConcreteGrade::C25).unwrap();
//! let steel = table.steel(SteelGrade::Grade460).unwrap();
//! assert_eq!(concrete.fck_mpa, 25.0);
//! assert_eq!(steel.fy_mpa, 460.0);
//! ```

pub mod concrete;
pub mod reinforcement;

pub use concrete::{ConcreteGrade, ConcreteProperties};
pub use reinforcement::{BarProperties, BarSize, SteelGrade, SteelProperties};

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, GradeKind};

static STANDARD_TABLE: Lazy<MaterialTable> = Lazy::new(|| {
    MaterialTable::from_rows(
        concrete::standard_rows(),
        reinforcement::standard_steel_rows(),
        reinforcement::standard_bar_rows(),
    )
});

/// Read-only material lookup tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTable {
    concrete: HashMap<ConcreteGrade, ConcreteProperties>,
    steel: HashMap<SteelGrade, SteelProperties>,
    /// Kept as a list: candidate evaluation depends on table order
    bars: Vec<BarProperties>,
}

impl MaterialTable {
    /// The standard BS 8110 table used by the calculator
    pub fn standard() -> &'static MaterialTable {
        &STANDARD_TABLE
    }

    /// Build a table from explicit rows.
    ///
    /// Bars are evaluated in the order given; callers should supply them
    /// in ascending area.
    pub fn from_rows(
        concrete: Vec<ConcreteProperties>,
        steel: Vec<SteelProperties>,
        bars: Vec<BarProperties>,
    ) -> Self {
        MaterialTable {
            concrete: concrete.into_iter().map(|row| (row.grade, row)).collect(),
            steel: steel.into_iter().map(|row| (row.grade, row)).collect(),
            bars,
        }
    }

    /// Look up concrete strengths
    pub fn concrete(&self, grade: ConcreteGrade) -> CalcResult<&ConcreteProperties> {
        self.concrete
            .get(&grade)
            .ok_or_else(|| CalcError::unknown_grade(GradeKind::Concrete, grade.code()))
    }

    /// Look up steel properties
    pub fn steel(&self, grade: SteelGrade) -> CalcResult<&SteelProperties> {
        self.steel
            .get(&grade)
            .ok_or_else(|| CalcError::unknown_grade(GradeKind::Steel, grade.code()))
    }

    /// All bars in table order
    pub fn bars(&self) -> &[BarProperties] {
        &self.bars
    }

    /// Selectable concrete grades, sorted
    pub fn concrete_grades(&self) -> Vec<ConcreteGrade> {
        let mut grades: Vec<_> = self.concrete.keys().copied().collect();
        grades.sort();
        grades
    }

    /// Selectable steel grades, sorted
    pub fn steel_grades(&self) -> Vec<SteelGrade> {
        let mut grades: Vec<_> = self.steel.keys().copied().collect();
        grades.sort();
        grades
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookups() {
        let table = MaterialTable::standard();
        assert_eq!(table.concrete(ConcreteGrade::C40).unwrap().fck_mpa, 40.0);
        assert_eq!(table.concrete(ConcreteGrade::C20).unwrap().fctm_mpa, 2.2);
        assert_eq!(table.steel(SteelGrade::Grade500).unwrap().fy_mpa, 500.0);
        assert_eq!(table.steel(SteelGrade::Grade500).unwrap().es_mpa, 200_000.0);
        assert_eq!(table.bars()[2].bar, BarSize::Y12);
        assert_eq!(table.bars()[2].area_mm2, 113.1);
    }

    #[test]
    fn test_standard_is_shared() {
        let a = MaterialTable::standard() as *const MaterialTable;
        let b = MaterialTable::standard() as *const MaterialTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_bar_order() {
        let codes: Vec<_> = MaterialTable::standard().bars().iter().map(|b| b.bar.code()).collect();
        assert_eq!(codes, vec!["Y8", "Y10", "Y12", "Y16", "Y20", "Y25"]);
    }

    #[test]
    fn test_missing_row_is_unknown_grade() {
        let table = MaterialTable::from_rows(
            concrete::standard_rows()
                .into_iter()
                .filter(|row| row.grade != ConcreteGrade::C40)
                .collect(),
            Vec::new(),
            Vec::new(),
        );
        let err = table.concrete(ConcreteGrade::C40).unwrap_err();
        assert_eq!(err, CalcError::unknown_grade(GradeKind::Concrete, "C40"));
        assert_eq!(table.steel(SteelGrade::Grade460).unwrap_err().error_code(), "UNKNOWN_GRADE");
        assert!(table.bars().is_empty());
    }

    #[test]
    fn test_grade_listing() {
        let table = MaterialTable::standard();
        assert_eq!(table.concrete_grades(), ConcreteGrade::ALL.to_vec());
        assert_eq!(table.steel_grades(), SteelGrade::ALL.to_vec());
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<MaterialTable>();
    }
}
