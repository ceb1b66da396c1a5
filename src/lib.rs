//! `analyze-gamut` checks how well a set of physically measured display
//! primaries (R, G, B, W chromaticity coordinates) covers a named reference
//! color gamut on the CIE 1931 chromaticity diagram. Measurements come in as a
//! CSV file, the reference gamuts (NTSC 1953, sRGB, DCI-P3, Rec.709, Rec.2020)
//! are compiled in, and the result is an annotated chart plus a fixed-format
//! numeric report: gamut areas, coverage and relative-area percentages, and
//! signed white-point deltas. It is meant for display calibration engineers
//! validating a panel or projector against an industry standard.

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

pub mod analysis;
pub mod chart;
pub mod chromaticity;
pub mod cli;
pub mod error;
pub mod gamut;
pub mod geometry;
pub mod locus;
pub mod measurement;
