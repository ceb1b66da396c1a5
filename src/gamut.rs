//! This module provides the compiled-in reference gamut table: the primaries,
//! white point, and display label of each industry standard the analyzer can
//! compare against. Primary coordinates follow the published standards
//! (ITU-R BT.709/BT.2020, SMPTE RP 431-2 for DCI-P3, and the 1953 NTSC
//! specification); white points are CIE Illuminant C for NTSC, the DCI white
//! for DCI-P3, and D65 everywhere else. The table is immutable: there is no
//! dynamic registration of gamuts.

use clap::ValueEnum;

use crate::chromaticity::Chromaticity;

/// A listing of the supported reference standards, in the same order as the
/// rows of [`REFERENCE_GAMUTS`]. Deriving [`ValueEnum`] makes `clap` reject an
/// unknown key at argument-parsing time, before any file I/O happens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Reference {
    /// NTSC 1953 broadcast gamut.
    #[value(name = "ntsc")]
    Ntsc,
    /// The sRGB / IEC 61966-2-1 gamut.
    #[value(name = "srgb")]
    Srgb,
    /// DCI-P3 digital cinema gamut.
    #[value(name = "dcip3")]
    DciP3,
    /// ITU-R BT.709 HDTV gamut (same primaries as sRGB).
    #[value(name = "rec709")]
    Rec709,
    /// ITU-R BT.2020 UHDTV gamut.
    #[value(name = "rec2020")]
    Rec2020,
}

/// The primaries, white point, and display label of one reference standard.
/// Primaries are ordered R, G, B; the triangle they span is the gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceGamut {
    /// The R, G, B primary chromaticities, in that order.
    pub primaries: [Chromaticity; 3],
    /// The reference white point.
    pub white: Chromaticity,
    /// Human-readable name used in the report and chart legend.
    pub label: &'static str,
}

/// The five reference gamuts, in the order of the [`Reference`] enum
/// definition.
pub static REFERENCE_GAMUTS: [ReferenceGamut; 5] = [
    ReferenceGamut {
        primaries: [
            Chromaticity::new(0.67, 0.33),
            Chromaticity::new(0.21, 0.71),
            Chromaticity::new(0.14, 0.08),
        ],
        // CIE Illuminant C
        white: Chromaticity::new(0.3101, 0.3162),
        label: "NTSC 1953",
    },
    ReferenceGamut {
        primaries: [
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
        ],
        // D65
        white: Chromaticity::new(0.3127, 0.3290),
        label: "sRGB",
    },
    ReferenceGamut {
        primaries: [
            Chromaticity::new(0.68, 0.32),
            Chromaticity::new(0.265, 0.69),
            Chromaticity::new(0.15, 0.06),
        ],
        // DCI white
        white: Chromaticity::new(0.314, 0.351),
        label: "DCI-P3",
    },
    ReferenceGamut {
        primaries: [
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
        ],
        // D65
        white: Chromaticity::new(0.3127, 0.3290),
        label: "Rec.709",
    },
    ReferenceGamut {
        primaries: [
            Chromaticity::new(0.708, 0.292),
            Chromaticity::new(0.170, 0.797),
            Chromaticity::new(0.131, 0.046),
        ],
        // D65
        white: Chromaticity::new(0.3127, 0.3290),
        label: "Rec.2020",
    },
];

impl Reference {
    /// Gets the gamut record for this reference standard.
    pub fn gamut(&self) -> &'static ReferenceGamut {
        match *self {
            Reference::Ntsc => &REFERENCE_GAMUTS[0],
            Reference::Srgb => &REFERENCE_GAMUTS[1],
            Reference::DciP3 => &REFERENCE_GAMUTS[2],
            Reference::Rec709 => &REFERENCE_GAMUTS[3],
            Reference::Rec2020 => &REFERENCE_GAMUTS[4],
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::{Reference, REFERENCE_GAMUTS};

    #[test]
    fn test_all_reference_coordinates_valid() {
        for gamut in &REFERENCE_GAMUTS {
            for p in gamut.primaries.iter().chain([&gamut.white]) {
                assert!(p.x >= 0.0 && p.y >= 0.0 && p.x + p.y <= 1.0, "{}", gamut.label);
            }
        }
    }

    #[test]
    fn test_cli_keys_match_fixed_set() {
        let keys: Vec<String> = Reference::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(keys, ["ntsc", "srgb", "dcip3", "rec709", "rec2020"]);
    }

    #[test]
    fn test_rec709_shares_srgb_primaries() {
        assert_eq!(
            Reference::Rec709.gamut().primaries,
            Reference::Srgb.gamut().primaries
        );
        assert_eq!(Reference::Rec709.gamut().white, Reference::Srgb.gamut().white);
    }
}
