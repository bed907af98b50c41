//! Reinforcing Steel
//!
//! Steel grades (yield strength, elastic modulus) and the high-yield bar
//! designations with their nominal cross-section areas.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, GradeKind};

/// Reinforcing steel grades, named by characteristic yield strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SteelGrade {
    #[serde(rename = "460")]
    Grade460,
    #[serde(rename = "500")]
    Grade500,
}

impl SteelGrade {
    /// All steel grades in table order
    pub const ALL: [SteelGrade; 2] = [SteelGrade::Grade460, SteelGrade::Grade500];

    /// Grade key as shown on forms and in reports (e.g., "460")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::Grade460 => "460",
            SteelGrade::Grade500 => "500",
        }
    }

    /// Parse an exact grade key ("460" or "500")
    pub fn from_code(s: &str) -> CalcResult<Self> {
        match s {
            "460" => Ok(SteelGrade::Grade460),
            "500" => Ok(SteelGrade::Grade500),
            _ => Err(CalcError::unknown_grade(GradeKind::Steel, s)),
        }
    }
}

impl std::str::FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Mechanical properties for one steel grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelProperties {
    pub grade: SteelGrade,
    /// Characteristic yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Elastic modulus Es (MPa)
    pub es_mpa: f64,
}

/// High-yield bar designations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BarSize {
    Y8,
    Y10,
    Y12,
    Y16,
    Y20,
    Y25,
}

impl BarSize {
    /// All bar sizes in table order (ascending area)
    pub const ALL: [BarSize; 6] = [
        BarSize::Y8,
        BarSize::Y10,
        BarSize::Y12,
        BarSize::Y16,
        BarSize::Y20,
        BarSize::Y25,
    ];

    /// Designation as written on drawings (e.g., "Y12")
    pub fn code(&self) -> &'static str {
        match self {
            BarSize::Y8 => "Y8",
            BarSize::Y10 => "Y10",
            BarSize::Y12 => "Y12",
            BarSize::Y16 => "Y16",
            BarSize::Y20 => "Y20",
            BarSize::Y25 => "Y25",
        }
    }

    /// Nominal diameter in mm
    pub const fn diameter_mm(&self) -> f64 {
        match self {
            BarSize::Y8 => 8.0,
            BarSize::Y10 => 10.0,
            BarSize::Y12 => 12.0,
            BarSize::Y16 => 16.0,
            BarSize::Y20 => 20.0,
            BarSize::Y25 => 25.0,
        }
    }
}

impl std::fmt::Display for BarSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A bar designation and its cross-section area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarProperties {
    pub bar: BarSize,
    /// Nominal cross-section area (mm²)
    pub area_mm2: f64,
}

pub(crate) fn standard_steel_rows() -> Vec<SteelProperties> {
    vec![
        SteelProperties {
            grade: SteelGrade::Grade460,
            fy_mpa: 460.0,
            es_mpa: 200_000.0,
        },
        SteelProperties {
            grade: SteelGrade::Grade500,
            fy_mpa: 500.0,
            es_mpa: 200_000.0,
        },
    ]
}

pub(crate) fn standard_bar_rows() -> Vec<BarProperties> {
    [
        (BarSize::Y8, 50.3),
        (BarSize::Y10, 78.5),
        (BarSize::Y12, 113.1),
        (BarSize::Y16, 201.1),
        (BarSize::Y20, 314.2),
        (BarSize::Y25, 490.9),
    ]
    .into_iter()
    .map(|(bar, area_mm2)| BarProperties { bar, area_mm2 })
    .collect()
}
