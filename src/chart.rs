//! Chart rendering: the CIE 1931 chromaticity diagram with the measured and
//! reference gamut triangles, both white points, a legend, and an info box
//! with the headline numbers. Rendering goes through `plotters`; the backend
//! is picked from the output extension (bitmap for png/jpg/bmp, SVG as the
//! vector format), and interactive mode renders to a temporary PNG and hands
//! it to the platform image viewer.

use std::path::{Path, PathBuf};
use std::process::Command;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::analysis::GamutAnalysis;
use crate::error::{GamutError, GamutResult};
use crate::gamut::ReferenceGamut;
use crate::locus;
use crate::measurement::Measurements;

/// Chart edge length in pixels: a 10-inch square figure at 300 DPI.
const CHART_SIZE: u32 = 3000;

// Styling for the diagram itself.
const LOCUS_FILL: RGBColor = RGBColor(235, 235, 235);
const LOCUS_EDGE: RGBColor = RGBColor(120, 120, 120);
const MEASURED_WHITE_COLOR: RGBColor = RGBColor(30, 70, 210);
const REFERENCE_COLOR: RGBColor = RGBColor(200, 40, 40);

/// Renders the annotated chart to `path`, choosing the backend from the file
/// extension: `png`, `jpg`/`jpeg`, or `bmp` for raster output, `svg` for
/// vector output. Anything else is an unsupported-format error.
pub fn render_chart(
    measurements: &Measurements,
    reference: &ReferenceGamut,
    analysis: &GamutAnalysis,
    path: &Path,
) -> GamutResult<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    log::debug!("rendering chart to {} ({})", path.display(), extension);

    match extension.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" => {
            let root =
                BitMapBackend::new(path, (CHART_SIZE, CHART_SIZE)).into_drawing_area();
            draw(&root, measurements, reference, analysis)?;
            root.present().map_err(|e| GamutError::Render(e.to_string()))
        }
        "svg" => {
            let root = SVGBackend::new(path, (CHART_SIZE, CHART_SIZE)).into_drawing_area();
            draw(&root, measurements, reference, analysis)?;
            root.present().map_err(|e| GamutError::Render(e.to_string()))
        }
        other => Err(GamutError::UnsupportedFormat(other.to_string())),
    }
}

/// Renders the chart to a temporary PNG and opens it with the platform image
/// viewer. Returns the path the chart was written to.
pub fn show_chart(
    measurements: &Measurements,
    reference: &ReferenceGamut,
    analysis: &GamutAnalysis,
) -> GamutResult<PathBuf> {
    let path = std::env::temp_dir().join("gamut-analysis.png");
    render_chart(measurements, reference, analysis, &path)?;
    open_in_viewer(&path)?;
    Ok(path)
}

#[cfg(target_os = "macos")]
fn open_in_viewer(path: &Path) -> GamutResult<()> {
    Command::new("open").arg(path).spawn()?;
    Ok(())
}

#[cfg(target_os = "windows")]
fn open_in_viewer(path: &Path) -> GamutResult<()> {
    Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_in_viewer(path: &Path) -> GamutResult<()> {
    Command::new("xdg-open").arg(path).spawn()?;
    Ok(())
}

// The backend-agnostic drawing routine. The drawing area is dropped on every
// return path, so no surface outlives a failed render.
fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    measurements: &Measurements,
    reference: &ReferenceGamut,
    analysis: &GamutAnalysis,
) -> GamutResult<()> {
    let fail = |e: DrawingAreaErrorKind<DB::ErrorType>| GamutError::Render(e.to_string());

    root.fill(&WHITE).map_err(fail)?;

    let mut chart = ChartBuilder::on(root)
        .caption("Color Gamut Analysis on CIE 1931 Diagram", ("sans-serif", 80))
        .margin(40)
        .x_label_area_size(120)
        .y_label_area_size(140)
        .build_cartesian_2d(0.0f64..0.8, 0.0f64..0.9)
        .map_err(fail)?;

    chart
        .configure_mesh()
        .x_desc("CIE x")
        .y_desc("CIE y")
        .label_style(("sans-serif", 45))
        .axis_desc_style(("sans-serif", 55))
        .draw()
        .map_err(fail)?;

    // the horseshoe: filled spectral locus with its outline, closed by the
    // purple line from 700 nm back to 380 nm
    let outline = locus::closed_outline();
    chart
        .draw_series(std::iter::once(Polygon::new(outline.clone(), LOCUS_FILL.filled())))
        .map_err(fail)?;
    chart
        .draw_series(LineSeries::new(outline, LOCUS_EDGE.stroke_width(3)))
        .map_err(fail)?;

    // measured gamut: solid outline
    let measured = close_triangle(&measurements.primaries().map(|p| (p.x, p.y)));
    chart
        .draw_series(LineSeries::new(measured, BLACK.stroke_width(6)))
        .map_err(fail)?
        .label(format!("Measured ({:.3})", analysis.measured_area))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 60, y)], BLACK.stroke_width(6)));

    // reference gamut: dashed outline
    let ref_triangle = close_triangle(&reference.primaries.map(|p| (p.x, p.y)));
    chart
        .draw_series(DashedLineSeries::new(
            ref_triangle,
            20,
            12,
            REFERENCE_COLOR.stroke_width(6),
        ))
        .map_err(fail)?
        .label(format!("{} ({:.3})", reference.label, analysis.reference_area))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 60, y)], REFERENCE_COLOR.stroke_width(6))
        });

    // white points: filled circle for measured, cross for reference
    let mw = measurements.white;
    let rw = reference.white;
    chart
        .draw_series(std::iter::once(Circle::new(
            (mw.x, mw.y),
            12,
            MEASURED_WHITE_COLOR.filled(),
        )))
        .map_err(fail)?
        .label(format!("Measured White ({:.3}, {:.3})", mw.x, mw.y))
        .legend(|(x, y)| Circle::new((x + 30, y), 12, MEASURED_WHITE_COLOR.filled()));
    chart
        .draw_series(std::iter::once(Cross::new(
            (rw.x, rw.y),
            12,
            REFERENCE_COLOR.stroke_width(4),
        )))
        .map_err(fail)?
        .label(format!("Reference White ({:.3}, {:.3})", rw.x, rw.y))
        .legend(|(x, y)| Cross::new((x + 30, y), 12, REFERENCE_COLOR.stroke_width(4)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 45))
        .draw()
        .map_err(fail)?;

    draw_info_box(root, analysis)?;
    Ok(())
}

// The headline-number overlay in the upper left of the plotting area,
// mirroring the stdout report at chart precision.
fn draw_info_box<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    analysis: &GamutAnalysis,
) -> GamutResult<()> {
    let fail = |e: DrawingAreaErrorKind<DB::ErrorType>| GamutError::Render(e.to_string());

    let lines = [
        format!("Coverage: {:.1}%", analysis.coverage),
        format!("Overlap Area: {:.3}", analysis.overlap_area),
        format!("Relative Area: {:.1}%", analysis.relative_area),
        format!("White Point Δx: {:+.4}", analysis.delta_x),
        format!("White Point Δy: {:+.4}", analysis.delta_y),
    ];

    let (left, top) = (220, 240);
    let line_height = 60;
    let box_width = 700;
    let box_height = line_height * lines.len() as i32 + 40;

    root.draw(&Rectangle::new(
        [(left, top), (left + box_width, top + box_height)],
        WHITE.mix(0.85).filled(),
    ))
    .map_err(fail)?;
    root.draw(&Rectangle::new(
        [(left, top), (left + box_width, top + box_height)],
        BLACK.stroke_width(2),
    ))
    .map_err(fail)?;

    for (i, line) in lines.iter().enumerate() {
        root.draw(&Text::new(
            line.clone(),
            (left + 20, top + 20 + line_height * i as i32),
            ("sans-serif", 45).into_font(),
        ))
        .map_err(fail)?;
    }
    Ok(())
}

// Closes a triangle for line drawing by repeating its first vertex.
fn close_triangle(points: &[(f64, f64); 3]) -> Vec<(f64, f64)> {
    vec![points[0], points[1], points[2], points[0]]
}
