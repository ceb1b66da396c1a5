//! The core comparison: measured gamut triangle against reference gamut
//! triangle. Produces the areas of both triangles and of their geometric
//! intersection, the coverage and relative-area percentages, and the signed
//! white-point deltas. [`GamutAnalysis`] also carries the fixed-format numeric
//! report through its `Display` impl, which the CLI prints to stdout whether
//! or not a chart was rendered.

use std::fmt;

use crate::chromaticity::Chromaticity;
use crate::gamut::ReferenceGamut;
use crate::geometry::{intersection_area, polygon_area};
use crate::measurement::Measurements;

/// The complete result of comparing a measurement set against a reference
/// gamut. All fields are plain numbers; nothing here is clamped or rounded
/// (rounding happens only at formatting time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutAnalysis {
    /// Display name of the reference standard.
    pub reference_label: &'static str,
    /// Shoelace area of the measured R-G-B triangle.
    pub measured_area: f64,
    /// Shoelace area of the reference R-G-B triangle.
    pub reference_area: f64,
    /// Area of the geometric intersection of the two triangles.
    pub overlap_area: f64,
    /// `overlap_area / reference_area × 100`; 0 when the triangles do not
    /// overlap.
    pub coverage: f64,
    /// `measured_area / reference_area × 100`. Deliberately not clamped: a
    /// measured gamut larger than the reference reports more than 100% even
    /// with poor overlap.
    pub relative_area: f64,
    /// The measured white point.
    pub measured_white: Chromaticity,
    /// The reference white point.
    pub reference_white: Chromaticity,
    /// Signed white-point delta, measured x minus reference x.
    pub delta_x: f64,
    /// Signed white-point delta, measured y minus reference y.
    pub delta_y: f64,
}

/// Runs the full comparison of a measurement set against a reference gamut.
pub fn analyze(measurements: &Measurements, reference: &ReferenceGamut) -> GamutAnalysis {
    let measured = measurements.primaries();
    let measured_area = polygon_area(&measured);
    let reference_area = polygon_area(&reference.primaries);
    let overlap_area = intersection_area(&measured, &reference.primaries);

    let coverage = overlap_area / reference_area * 100.0;
    let relative_area = measured_area / reference_area * 100.0;
    let (delta_x, delta_y) = measurements.white.delta(&reference.white);

    log::debug!(
        "measured area {:.6}, reference area {:.6}, overlap {:.6}",
        measured_area,
        reference_area,
        overlap_area
    );

    GamutAnalysis {
        reference_label: reference.label,
        measured_area,
        reference_area,
        overlap_area,
        coverage,
        relative_area,
        measured_white: measurements.white,
        reference_white: reference.white,
        delta_x,
        delta_y,
    }
}

impl fmt::Display for GamutAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Numerical Analysis:")?;
        writeln!(f, "Reference Gamut: {}", self.reference_label)?;
        writeln!(f, "Measured Gamut Area: {:.6}", self.measured_area)?;
        writeln!(f, "Reference Gamut Area: {:.6}", self.reference_area)?;
        writeln!(f, "Overlap Area: {:.6}", self.overlap_area)?;
        writeln!(f, "Coverage: {:.1}%", self.coverage)?;
        writeln!(f, "Relative Area: {:.1}%", self.relative_area)?;
        writeln!(f)?;
        writeln!(f, "White Point Analysis:")?;
        writeln!(
            f,
            "Measured White: ({:.4}, {:.4})",
            self.measured_white.x, self.measured_white.y
        )?;
        writeln!(
            f,
            "Reference White: ({:.4}, {:.4})",
            self.reference_white.x, self.reference_white.y
        )?;
        writeln!(f, "Δx: {:+.4}", self.delta_x)?;
        write!(f, "Δy: {:+.4}", self.delta_y)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::analyze;
    use crate::chromaticity::Chromaticity;
    use crate::gamut::{Reference, ReferenceGamut};
    use crate::measurement::Measurements;

    fn srgb_measurements() -> Measurements {
        Measurements {
            red: Chromaticity::new(0.64, 0.33),
            green: Chromaticity::new(0.30, 0.60),
            blue: Chromaticity::new(0.15, 0.06),
            white: Chromaticity::new(0.3127, 0.3290),
        }
    }

    #[test]
    fn test_self_measurement_is_full_coverage() {
        let analysis = analyze(&srgb_measurements(), Reference::Srgb.gamut());
        assert_approx_eq!(f64, analysis.coverage, 100.0, epsilon = 1e-6);
        assert_approx_eq!(f64, analysis.relative_area, 100.0, epsilon = 1e-6);
        assert_approx_eq!(f64, analysis.delta_x, 0.0, epsilon = 1e-12);
        assert_approx_eq!(f64, analysis.delta_y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_disjoint_gamuts_have_zero_coverage() {
        let tiny = Measurements {
            red: Chromaticity::new(0.02, 0.01),
            green: Chromaticity::new(0.05, 0.01),
            blue: Chromaticity::new(0.02, 0.04),
            white: Chromaticity::new(0.03, 0.02),
        };
        let analysis = analyze(&tiny, Reference::Srgb.gamut());
        assert_eq!(analysis.coverage, 0.0);
        assert!(analysis.relative_area > 0.0);
    }

    #[test]
    fn test_double_scale_gamut_reports_quadruple_relative_area() {
        // measured is the reference triangle scaled by 2 about the origin:
        // 4x the area, but only partially overlapping
        let reference = ReferenceGamut {
            primaries: [
                Chromaticity::new(0.05, 0.05),
                Chromaticity::new(0.25, 0.05),
                Chromaticity::new(0.05, 0.25),
            ],
            white: Chromaticity::new(0.10, 0.10),
            label: "scaled fixture",
        };
        let measured = Measurements {
            red: Chromaticity::new(0.10, 0.10),
            green: Chromaticity::new(0.50, 0.10),
            blue: Chromaticity::new(0.10, 0.50),
            white: Chromaticity::new(0.10, 0.10),
        };
        let analysis = analyze(&measured, &reference);
        assert_approx_eq!(f64, analysis.relative_area, 400.0, epsilon = 1e-6);
        assert!(analysis.relative_area > 100.0);
        assert!(analysis.coverage <= 100.0);
    }

    #[test]
    fn test_white_deltas_are_signed() {
        let mut measurements = srgb_measurements();
        measurements.white = Chromaticity::new(0.3100, 0.3300);
        let analysis = analyze(&measurements, Reference::Srgb.gamut());
        assert_approx_eq!(f64, analysis.delta_x, -0.0027, epsilon = 1e-12);
        assert_approx_eq!(f64, analysis.delta_y, 0.0010, epsilon = 1e-12);
    }

    #[test]
    fn test_report_format() {
        let analysis = analyze(&srgb_measurements(), Reference::Srgb.gamut());
        let report = analysis.to_string();
        assert!(report.contains("Reference Gamut: sRGB"));
        assert!(report.contains("Measured Gamut Area: 0.112050"));
        assert!(report.contains("Coverage: 100.0%"));
        assert!(report.contains("Relative Area: 100.0%"));
        assert!(report.contains("Measured White: (0.3127, 0.3290)"));
        assert!(report.contains("Δx: +0.0000"));
        assert!(report.contains("Δy: +0.0000"));
    }

    #[test]
    fn test_rec2020_panel_against_srgb_exceeds_reference() {
        // a wide-gamut panel measured against sRGB covers it completely
        let wide = Measurements {
            red: Chromaticity::new(0.708, 0.292),
            green: Chromaticity::new(0.170, 0.797),
            blue: Chromaticity::new(0.131, 0.046),
            white: Chromaticity::new(0.3127, 0.3290),
        };
        let analysis = analyze(&wide, Reference::Srgb.gamut());
        assert_approx_eq!(f64, analysis.coverage, 100.0, epsilon = 1e-3);
        assert!(analysis.relative_area > 100.0);
    }
}
