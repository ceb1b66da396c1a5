//! CSV loading and validation for measurement data. The input is a CSV file
//! with a header row containing at least the columns `Color`, `x`, and `y`;
//! exactly the four colors R, G, B, and W must be present. Extra columns and
//! rows with unrecognized color labels are ignored, and a duplicate row for a
//! color overwrites the earlier one (standard tabular load semantics).

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use serde_derive::Deserialize;

use crate::chromaticity::Chromaticity;
use crate::error::{CoordinateError, GamutError, GamutResult};

/// The four measured color channels: the three primaries plus white.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// The red primary.
    Red,
    /// The green primary.
    Green,
    /// The blue primary.
    Blue,
    /// The white point.
    White,
}

/// All four channels, in the row order expected in reports: R, G, B, W.
pub static CHANNELS: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

impl Channel {
    /// Maps a CSV `Color` label to a channel. Returns `None` for anything
    /// other than the exact labels `R`, `G`, `B`, `W`.
    pub fn from_label(label: &str) -> Option<Channel> {
        match label {
            "R" => Some(Channel::Red),
            "G" => Some(Channel::Green),
            "B" => Some(Channel::Blue),
            "W" => Some(Channel::White),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match *self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::White => "W",
        };
        write!(f, "{}", label)
    }
}

// The raw CSV row shape. The coordinates stay as strings here so a
// non-numeric field can be reported against its color channel instead of
// surfacing as an opaque deserialization error.
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Color")]
    color: String,
    x: String,
    y: String,
}

/// A complete, validated measurement set: one chromaticity per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// The measured red primary.
    pub red: Chromaticity,
    /// The measured green primary.
    pub green: Chromaticity,
    /// The measured blue primary.
    pub blue: Chromaticity,
    /// The measured white point.
    pub white: Chromaticity,
}

impl Measurements {
    /// The measured gamut triangle, ordered R, G, B.
    pub fn primaries(&self) -> [Chromaticity; 3] {
        [self.red, self.green, self.blue]
    }

    /// Looks up one channel's coordinate.
    pub fn channel(&self, channel: Channel) -> Chromaticity {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }
}

/// Opens `path` and loads a measurement set from it.
pub fn load_measurements_from_path(path: &Path) -> GamutResult<Measurements> {
    log::debug!("loading measurements from {}", path.display());
    let file = File::open(path)?;
    load_measurements(file)
}

/// Loads and validates a measurement set from CSV data.
///
/// Validation happens in a fixed order: required columns are checked against
/// the header before any row is parsed, the set of present colors is checked
/// before any coordinate is validated, and only then does each row pass
/// through coordinate validation (tagged with its channel on failure).
pub fn load_measurements<R: io::Read>(reader: R) -> GamutResult<Measurements> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in ["Color", "x", "y"] {
        if !headers.iter().any(|h| h == required) {
            return Err(GamutError::MissingColumns);
        }
    }

    let mut rows: Vec<(Channel, String, String)> = Vec::new();
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        // rows for unknown color labels are ignored
        if let Some(channel) = Channel::from_label(record.color.trim()) {
            rows.push((channel, record.x, record.y));
        }
    }

    let missing: Vec<Channel> = CHANNELS
        .iter()
        .filter(|c| !rows.iter().any(|(ch, _, _)| ch == *c))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(GamutError::MissingMeasurements(missing));
    }

    let mut table: HashMap<Channel, Chromaticity> = HashMap::new();
    for (channel, raw_x, raw_y) in rows {
        let (x, y) = match (raw_x.trim().parse::<f64>(), raw_y.trim().parse::<f64>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                return Err(GamutError::InvalidMeasurement {
                    channel,
                    source: CoordinateError::NotNumeric { x: raw_x, y: raw_y },
                })
            }
        };
        let point = Chromaticity::try_new(x, y)
            .map_err(|source| GamutError::InvalidMeasurement { channel, source })?;
        // last occurrence of a duplicated color wins
        table.insert(channel, point);
    }

    log::debug!("loaded {} measurement channels", table.len());
    Ok(Measurements {
        red: table[&Channel::Red],
        green: table[&Channel::Green],
        blue: table[&Channel::Blue],
        white: table[&Channel::White],
    })
}

#[cfg(test)]
mod tests {
    use super::{load_measurements, Channel};
    use crate::error::GamutError;

    const SRGB_CSV: &str = "\
Color,x,y
R,0.64,0.33
G,0.30,0.60
B,0.15,0.06
W,0.3127,0.3290
";

    #[test]
    fn test_loads_all_four_channels() {
        let m = load_measurements(SRGB_CSV.as_bytes()).unwrap();
        assert_eq!(m.red.x, 0.64);
        assert_eq!(m.green.y, 0.60);
        assert_eq!(m.blue.x, 0.15);
        assert_eq!(m.white.y, 0.3290);
        assert_eq!(m.channel(Channel::White), m.white);
    }

    #[test]
    fn test_missing_channel_reported_by_name() {
        let csv = "Color,x,y\nR,0.64,0.33\nG,0.30,0.60\nW,0.3127,0.3290\n";
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        match err {
            GamutError::MissingMeasurements(missing) => {
                assert_eq!(missing, vec![Channel::Blue]);
            }
            other => panic!("unexpected error: {}", other),
        }
        // and the rendered message matches what the CLI prints
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing measurements for"));
        assert!(err.to_string().contains('B'));
    }

    #[test]
    fn test_missing_columns_detected_before_rows() {
        let csv = "Color,cx,cy\nR,0.64,0.33\n";
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GamutError::MissingColumns));
        assert_eq!(err.to_string(), "CSV must contain columns: Color, x, y");
    }

    #[test]
    fn test_out_of_range_coordinate_tagged_with_channel() {
        let csv = "Color,x,y\nR,1.2,0.33\nG,0.30,0.60\nB,0.15,0.06\nW,0.3127,0.3290\n";
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid measurement for R"), "{}", err);
    }

    #[test]
    fn test_non_numeric_coordinate_tagged_with_channel() {
        let csv = "Color,x,y\nR,0.64,0.33\nG,n/a,0.60\nB,0.15,0.06\nW,0.3127,0.3290\n";
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Invalid measurement for G"), "{}", msg);
        assert!(msg.contains("n/a"), "{}", msg);
    }

    #[test]
    fn test_missing_check_runs_before_validation() {
        // B is absent *and* R is invalid: the missing set wins, like a
        // set-membership check done before per-row parsing.
        let csv = "Color,x,y\nR,1.2,0.33\nG,0.30,0.60\nW,0.3127,0.3290\n";
        let err = load_measurements(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GamutError::MissingMeasurements(_)), "{}", err);
    }

    #[test]
    fn test_duplicate_rows_last_wins() {
        let csv = "\
Color,x,y
R,0.60,0.30
G,0.30,0.60
B,0.15,0.06
W,0.3127,0.3290
R,0.64,0.33
";
        let m = load_measurements(csv.as_bytes()).unwrap();
        assert_eq!(m.red.x, 0.64);
        assert_eq!(m.red.y, 0.33);
    }

    #[test]
    fn test_extra_columns_and_unknown_labels_ignored() {
        let csv = "\
Color,x,y,luminance
R,0.64,0.33,120.5
G,0.30,0.60,300.1
B,0.15,0.06,30.8
W,0.3127,0.3290,450.0
C,0.22,0.33,100.0
";
        let m = load_measurements(csv.as_bytes()).unwrap();
        assert_eq!(m.primaries()[0].x, 0.64);
    }
}
