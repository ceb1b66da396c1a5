//! The error taxonomy for the analyzer. Every failure a run can hit is one of
//! a small set of kinds, and all of them propagate up to a single handler in
//! the binary that prints `Error: <message>` and exits nonzero. There is no
//! retry path: the computation is one-shot and deterministic.

use thiserror::Error;

use crate::measurement::Channel;

/// Result alias used throughout the crate.
pub type GamutResult<T> = Result<T, GamutError>;

/// A failure while validating a single chromaticity coordinate pair. Carried
/// inside [`GamutError::InvalidMeasurement`] so the report names the color
/// channel the bad pair belonged to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// The pair is numeric but outside the valid chromaticity triangle.
    #[error("Invalid chromaticity coordinates: x={x}, y={y}")]
    OutOfRange {
        /// The offending x value.
        x: f64,
        /// The offending y value.
        y: f64,
    },

    /// One or both fields could not be parsed as a number.
    #[error("Invalid coordinate values: x={x}, y={y}")]
    NotNumeric {
        /// The raw x field from the CSV.
        x: String,
        /// The raw y field from the CSV.
        y: String,
    },
}

/// Anything that can go wrong between reading the CSV and writing the chart.
#[derive(Error, Debug)]
pub enum GamutError {
    /// A measurement row failed coordinate validation.
    #[error("Invalid measurement for {channel}: {source}")]
    InvalidMeasurement {
        /// The color channel the row was for.
        channel: Channel,
        /// The underlying validation failure.
        source: CoordinateError,
    },

    /// One or more of the required R, G, B, W rows is absent.
    #[error("Missing measurements for: {}", join_channels(.0))]
    MissingMeasurements(Vec<Channel>),

    /// The CSV header lacks one of the required columns.
    #[error("CSV must contain columns: Color, x, y")]
    MissingColumns,

    /// The output path has an extension no chart backend understands.
    #[error("Unsupported output format: {0} (expected png, jpg, bmp, or svg; use svg for vector output)")]
    UnsupportedFormat(String),

    /// The chart backend failed while drawing or writing.
    #[error("Chart rendering failed: {0}")]
    Render(String),

    /// CSV transport or record-shape error from the `csv` crate.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Filesystem error (input file unreadable, viewer not spawnable, ...).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn join_channels(channels: &[Channel]) -> String {
    channels
        .iter()
        .map(Channel::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{CoordinateError, GamutError};
    use crate::measurement::Channel;

    #[test]
    fn test_invalid_measurement_names_channel() {
        let err = GamutError::InvalidMeasurement {
            channel: Channel::Red,
            source: CoordinateError::OutOfRange { x: 1.2, y: 0.33 },
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid measurement for R"), "got: {}", msg);
        assert!(msg.contains("x=1.2"), "got: {}", msg);
    }

    #[test]
    fn test_missing_measurements_lists_channels() {
        let err = GamutError::MissingMeasurements(vec![Channel::Blue, Channel::White]);
        assert_eq!(err.to_string(), "Missing measurements for: B, W");
    }

    #[test]
    fn test_non_numeric_keeps_raw_fields() {
        let err = CoordinateError::NotNumeric {
            x: "abc".to_string(),
            y: "0.3".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid coordinate values: x=abc, y=0.3");
    }
}
