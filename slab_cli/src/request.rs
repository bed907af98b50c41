//! Design requests as entered by a user
//!
//! A request holds raw form values: numbers already parsed, grade keys still
//! strings. It is range-checked here before anything reaches `slab_core`,
//! which trusts its caller for sensible bounds.

use serde::{Deserialize, Serialize};
use slab_core::{CalcResult, SlabInput};

/// Longest span the form accepts (m)
pub const MAX_SPAN_M: f64 = 12.0;
pub const MAX_DEAD_LOAD_KN_M2: f64 = 50.0;
pub const MAX_LIVE_LOAD_KN_M2: f64 = 20.0;
pub const MIN_COVER_MM: f64 = 15.0;
pub const MAX_COVER_MM: f64 = 75.0;

pub const DEFAULT_CONCRETE: &str = "C25";
pub const DEFAULT_STEEL: &str = "460";
pub const DEFAULT_COVER_MM: f64 = 25.0;

fn default_concrete() -> String {
    DEFAULT_CONCRETE.to_string()
}

fn default_steel() -> String {
    DEFAULT_STEEL.to_string()
}

fn default_cover() -> f64 {
    DEFAULT_COVER_MM
}

/// Raw slab design request
///
/// ## JSON Example
///
/// ```json
/// { "span_m": 4.0, "dead_load_kn_m2": 3.0, "live_load_kn_m2": 2.0 }
/// ```
///
/// Grades and cover fall back to C25, 460 and 25 mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabRequest {
    pub span_m: f64,
    #[serde(default)]
    pub dead_load_kn_m2: f64,
    #[serde(default)]
    pub live_load_kn_m2: f64,
    #[serde(default = "default_concrete")]
    pub concrete_grade: String,
    #[serde(default = "default_steel")]
    pub steel_grade: String,
    #[serde(default = "default_cover")]
    pub cover_mm: f64,
}

impl SlabRequest {
    /// Parse a request document
    pub fn from_json(text: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Check domain bounds, collecting every violation
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if !(self.span_m > 0.0 && self.span_m <= MAX_SPAN_M) {
            errors.push("Span must be between 0.1m and 12m".to_string());
        }
        if !(self.dead_load_kn_m2 >= 0.0 && self.dead_load_kn_m2 <= MAX_DEAD_LOAD_KN_M2) {
            errors.push("Dead load must be between 0 and 50 kN/m²".to_string());
        }
        if !(self.live_load_kn_m2 >= 0.0 && self.live_load_kn_m2 <= MAX_LIVE_LOAD_KN_M2) {
            errors.push("Live load must be between 0 and 20 kN/m²".to_string());
        }
        if !(self.cover_mm >= MIN_COVER_MM && self.cover_mm <= MAX_COVER_MM) {
            errors.push("Cover must be between 15mm and 75mm".to_string());
        }
        errors
    }

    /// Resolve grade keys into a typed calculator input
    pub fn to_input(&self) -> CalcResult<SlabInput> {
        SlabInput::from_codes(
            self.span_m,
            self.dead_load_kn_m2,
            self.live_load_kn_m2,
            &self.concrete_grade,
            &self.steel_grade,
            self.cover_mm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slab_core::ConcreteGrade;

    fn request() -> SlabRequest {
        SlabRequest {
            span_m: 4.0,
            dead_load_kn_m2: 3.0,
            live_load_kn_m2: 2.0,
            concrete_grade: "C25".to_string(),
            steel_grade: "460".to_string(),
            cover_mm: 25.0,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut req = request();
        req.span_m = 12.0;
        req.dead_load_kn_m2 = 50.0;
        req.live_load_kn_m2 = 0.0;
        req.cover_mm = 75.0;
        assert!(req.validate().is_empty());

        req.cover_mm = 15.0;
        assert!(req.validate().is_empty());
    }

    #[test]
    fn test_collects_every_violation() {
        let req = SlabRequest {
            span_m: 0.0,
            dead_load_kn_m2: -1.0,
            live_load_kn_m2: 25.0,
            cover_mm: 10.0,
            ..request()
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0], "Span must be between 0.1m and 12m");
        assert_eq!(errors[3], "Cover must be between 15mm and 75mm");
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut req = request();
        req.span_m = f64::NAN;
        assert_eq!(req.validate().len(), 1);
    }

    #[test]
    fn test_json_defaults() {
        let req = SlabRequest::from_json(r#"{ "span_m": 4.0 }"#).unwrap();
        assert_eq!(req.concrete_grade, "C25");
        assert_eq!(req.steel_grade, "460");
        assert_eq!(req.cover_mm, 25.0);
        assert_eq!(req.dead_load_kn_m2, 0.0);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = SlabRequest::from_json(r#"{ "span_m": "four" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let err = SlabRequest::from_json("{}").unwrap_err();
        assert!(err.to_string().contains("span_m"));
    }

    #[test]
    fn test_to_input() {
        let input = request().to_input().unwrap();
        assert_eq!(input.concrete_grade, ConcreteGrade::C25);

        let mut req = request();
        req.concrete_grade = "C99".to_string();
        assert_eq!(req.to_input().unwrap_err().error_code(), "UNKNOWN_GRADE");
    }
}
