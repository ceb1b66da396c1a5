//! This module contains [`Chromaticity`], a point in the 2D CIE 1931 xy
//! chromaticity plane, along with the validation that keeps every coordinate
//! inside the triangle that chromaticity coordinates can physically occupy:
//! `0 <= x <= 1`, `0 <= y <= 1`, `x + y <= 1`. All measured and reference
//! coordinates in this crate pass through [`Chromaticity::try_new`].

use crate::error::CoordinateError;

/// A point in the CIE 1931 xy chromaticity plane. The z coordinate of the
/// underlying xyY space is implied (`z = 1 - x - y`), so two values fully
/// describe a hue/saturation pair independent of luminance.
///
/// # Examples
/// ```
/// # use analyze_gamut::chromaticity::Chromaticity;
/// // the D65 white point
/// let d65 = Chromaticity::try_new(0.3127, 0.3290).unwrap();
/// assert!((d65.x - 0.3127).abs() <= 1e-10);
/// // a coordinate outside the chromaticity triangle is rejected
/// assert!(Chromaticity::try_new(0.7, 0.7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// The CIE x coordinate.
    pub x: f64,
    /// The CIE y coordinate.
    pub y: f64,
}

impl Chromaticity {
    /// Constructs a chromaticity without validation. Used for the compiled-in
    /// reference tables, whose values are known good.
    pub const fn new(x: f64, y: f64) -> Chromaticity {
        Chromaticity { x, y }
    }

    /// Validates and constructs a chromaticity coordinate. Fails with
    /// [`CoordinateError::OutOfRange`] unless both components are in `[0, 1]`
    /// and their sum is at most 1.
    pub fn try_new(x: f64, y: f64) -> Result<Chromaticity, CoordinateError> {
        if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) || x + y > 1.0 {
            return Err(CoordinateError::OutOfRange { x, y });
        }
        Ok(Chromaticity { x, y })
    }

    /// The signed componentwise difference `self - other`, returned as
    /// `(dx, dy)`. This is the white-point delta reported in the analysis:
    /// raw values, no tolerance applied.
    /// # Example
    /// ```
    /// # use analyze_gamut::chromaticity::Chromaticity;
    /// let measured = Chromaticity::new(0.3150, 0.3270);
    /// let reference = Chromaticity::new(0.3127, 0.3290);
    /// let (dx, dy) = measured.delta(&reference);
    /// assert!((dx - 0.0023).abs() <= 1e-10);
    /// assert!((dy + 0.0020).abs() <= 1e-10);
    /// ```
    pub fn delta(&self, other: &Chromaticity) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}
