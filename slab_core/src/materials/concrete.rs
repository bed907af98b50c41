//! Concrete Grades (BS 8110 / Eurocode 2 aligned)
//!
//! Characteristic cube strengths and mean tensile strengths for the
//! selectable concrete classes.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, GradeKind};

/// Concrete strength classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConcreteGrade {
    C20,
    C25,
    C30,
    C35,
    C40,
}

impl ConcreteGrade {
    /// All concrete grades in table order
    pub const ALL: [ConcreteGrade; 5] = [
        ConcreteGrade::C20,
        ConcreteGrade::C25,
        ConcreteGrade::C30,
        ConcreteGrade::C35,
        ConcreteGrade::C40,
    ];

    /// Grade key as shown on forms and in reports (e.g., "C25")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::C20 => "C20",
            ConcreteGrade::C25 => "C25",
            ConcreteGrade::C30 => "C30",
            ConcreteGrade::C35 => "C35",
            ConcreteGrade::C40 => "C40",
        }
    }

    /// Parse an exact grade key ("C25"); keys are case-sensitive
    pub fn from_code(s: &str) -> CalcResult<Self> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.code() == s)
            .ok_or_else(|| CalcError::unknown_grade(GradeKind::Concrete, s))
    }
}

impl std::str::FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Strength values for one concrete grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteProperties {
    /// Grade these values belong to
    pub grade: ConcreteGrade,
    /// Characteristic compressive strength fck (MPa)
    pub fck_mpa: f64,
    /// Mean tensile strength fctm (MPa)
    pub fctm_mpa: f64,
}

/// Default concrete rows, in table order
pub(crate) fn standard_rows() -> Vec<ConcreteProperties> {
    [
        (ConcreteGrade::C20, 20.0, 2.2),
        (ConcreteGrade::C25, 25.0, 2.6),
        (ConcreteGrade::C30, 30.0, 2.9),
        (ConcreteGrade::C35, 35.0, 3.2),
        (ConcreteGrade::C40, 40.0, 3.5),
    ]
    .into_iter()
    .map(|(grade, fck_mpa, fctm_mpa)| ConcreteProperties {
        grade,
        fck_mpa,
        fctm_mpa,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code() {
        assert_eq!(ConcreteGrade::from_code("C25").unwrap(), ConcreteGrade::C25);
        assert_eq!("C40".parse::<ConcreteGrade>().unwrap(), ConcreteGrade::C40);
    }

    #[test]
    fn test_only_exact_keys_parse() {
        for key in ["c25", "25", " C25", "C25 ", "CC25", ""] {
            let err = ConcreteGrade::from_code(key).unwrap_err();
            assert_eq!(err, CalcError::unknown_grade(GradeKind::Concrete, key), "{:?}", key);
        }
    }

    #[test]
    fn test_unknown_grade() {
        let err = ConcreteGrade::from_code("C99").unwrap_err();
        assert_eq!(err, CalcError::unknown_grade(GradeKind::Concrete, "C99"));
    }

    #[test]
    fn test_code_roundtrip() {
        for grade in ConcreteGrade::ALL {
            assert_eq!(ConcreteGrade::from_code(grade.code()).unwrap(), grade);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&ConcreteGrade::C35).unwrap();
        assert_eq!(json, "\"C35\"");
    }

    #[test]
    fn test_standard_rows_cover_all_grades() {
        let rows = standard_rows();
        assert_eq!(rows.len(), ConcreteGrade::ALL.len());
        assert_eq!(rows[1].grade, ConcreteGrade::C25);
        assert_eq!(rows[1].fck_mpa, 25.0);
        assert_eq!(rows[1].fctm_mpa, 2.6);
    }
}
