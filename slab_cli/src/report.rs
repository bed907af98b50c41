//! Plain-text calculation report

use std::fmt::Write;

use slab_core::materials::MaterialTable;
use slab_core::SlabResult;

const RULE: &str = "═══════════════════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Full step-by-step report. `writeln!` into a String is infallible.
pub fn render(result: &SlabResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  ONE-WAY SLAB DESIGN (BS 8110)");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Span:      {:.2} m", result.span_m);
    let _ = writeln!(out, "  Dead load: {:.2} kN/m²", result.dead_load_kn_m2);
    let _ = writeln!(out, "  Live load: {:.2} kN/m²", result.live_load_kn_m2);
    let _ = writeln!(
        out,
        "  Concrete:  {} (fck = {} MPa, fctm = {} MPa)",
        result.concrete_grade, result.fck_mpa, result.fctm_mpa
    );
    let _ = writeln!(
        out,
        "  Steel:     {} (fy = {} MPa, Es = {} MPa)",
        result.steel_grade, result.fy_mpa, result.es_mpa
    );
    let _ = writeln!(out, "  Cover:     {} mm", result.cover_mm);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "1. Ultimate load  n = {}gk + {}qk = {} kN/m²",
        result.load_factor_dead, result.load_factor_live, result.ultimate_load_kn_m2
    );
    let _ = writeln!(out, "2. Moment         M = nL²/8 = {} kN·m/m", result.moment_knm);
    let _ = writeln!(
        out,
        "3. Slab depth     L/25 = {} mm → h = {} mm",
        result.estimated_depth_mm, result.slab_depth_mm
    );
    let _ = writeln!(
        out,
        "4. Effective depth d = h - c - {}/2 = {} mm",
        result.assumed_bar_diameter_mm, result.effective_depth_mm
    );
    let _ = writeln!(out, "5. K = M/(bd²fck) = {}", result.k_value);
    let _ = writeln!(
        out,
        "6. K' = {}  compression steel needed: {}",
        result.k_prime,
        yes_no(result.compression_reinforcement_needed)
    );
    let _ = writeln!(
        out,
        "7. Lever arm      z = {} mm ({:?})",
        result.lever_arm_mm, result.lever_arm_branch
    );
    let _ = writeln!(out, "8. As,req = {} mm²/m", result.as_required_mm2);
    let _ = writeln!(
        out,
        "9. As,min = {} mm²/m  As,prov = {} mm²/m",
        result.as_min_mm2, result.as_provided_mm2
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "10. Reinforcement options:");
    let _ = writeln!(
        out,
        "    {:<5} {:>9} {:>9} {:>11}  {}",
        "Bar", "Area", "Spacing", "As,actual", "Adequate"
    );
    for option in &result.reinforcement_options {
        let _ = writeln!(
            out,
            "    {:<5} {:>9.1} {:>9} {:>11.1}  {}",
            option.bar_size.code(),
            option.bar_area_mm2,
            option.spacing_mm,
            option.as_actual_mm2,
            yes_no(option.adequate)
        );
    }
    let _ = writeln!(out, "    Provide: {}", result.reinforcement_suggestion);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "11. Deflection: L/h = {} ≤ {} × {} = {}  {}",
        result.actual_span_depth,
        result.basic_span_depth_ratio,
        result.modification_factor,
        result.allowable_span_depth,
        status_icon(result.deflection_ok)
    );
    let _ = writeln!(
        out,
        "12. Shear: V = {} kN, v = {} MPa ≤ vc = {} MPa  {}",
        result.shear_force_kn,
        result.shear_stress_mpa,
        result.concrete_shear_strength_mpa,
        status_icon(result.shear_ok)
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", RULE);
    if result.passes() {
        let _ = writeln!(out, "  RESULT: PASS ({})", result.reinforcement_suggestion);
    } else {
        let _ = writeln!(out, "  RESULT: FAIL (check: {})", result.failed_checks().join(", "));
    }
    let _ = writeln!(out, "{}", RULE);

    out
}

/// Selectable grades, one line per table
pub fn render_grades(table: &MaterialTable) -> String {
    let concrete: Vec<_> = table.concrete_grades().iter().map(|g| g.code()).collect();
    let steel: Vec<_> = table.steel_grades().iter().map(|g| g.code()).collect();
    let bars: Vec<_> = table.bars().iter().map(|b| b.bar.code()).collect();
    format!(
        "Concrete grades: {}\nSteel grades:    {}\nBar sizes:       {}\n",
        concrete.join(", "),
        steel.join(", "),
        bars.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use slab_core::compute_slab_design;

    #[test]
    fn test_report_contains_steps() {
        let result = compute_slab_design(4.0, 3.0, 2.0, "C25", "460", 25.0).unwrap();
        let report = render(&result);

        assert!(report.contains("h = 175 mm"));
        assert!(report.contains("Provide: Y8 @ 175mm c/c"));
        assert!(report.contains("RESULT: PASS"));
        assert_eq!(report.matches("[OK]").count(), 2);
    }

    #[test]
    fn test_report_lists_failures() {
        let result = compute_slab_design(12.0, 50.0, 20.0, "C20", "460", 75.0).unwrap();
        let report = render(&result);

        assert!(report.contains("RESULT: FAIL"));
        assert!(report.contains("Reinforcement"));
    }

    #[test]
    fn test_render_grades() {
        let text = render_grades(MaterialTable::standard());
        assert!(text.contains("C20, C25, C30, C35, C40"));
        assert!(text.contains("460, 500"));
        assert!(text.contains("Y8, Y10, Y12, Y16, Y20, Y25"));
    }
}
