//! Per-month colours.
//!
//! Every month is drawn from a single hue: pale cells with dark numbers and
//! an inverted title bar. Hues are fractions of a turn; values above 1 are
//! read as degrees.

use crate::error::{CalendarError, Result};
use crate::graphics::Color;

/// Lightness of day and header cell backgrounds.
pub const CELL_BACKGROUND_LIGHTNESS: f64 = 0.90;
/// Lightness of day and header text.
pub const CELL_TEXT_LIGHTNESS: f64 = 0.15;
/// Lightness of the title bar background.
pub const TITLE_BACKGROUND_LIGHTNESS: f64 = 0.15;
/// Lightness of the title text.
pub const TITLE_TEXT_LIGHTNESS: f64 = 0.90;
/// Saturation shared by every palette colour.
pub const SATURATION: f64 = 1.0;

/// Hue range of the default scheme, in degrees.
pub const DEFAULT_START_DEGREES: f64 = 120.0;
pub const DEFAULT_END_DEGREES: f64 = 330.0;

/// Degrees above 1 are converted to fractions of a turn.
pub fn normalize_hue(hue: f64) -> f64 {
    if hue > 1.0 {
        hue / 360.0
    } else {
        hue
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub cell_background: Color,
    pub cell_text: Color,
    pub title_background: Color,
    pub title_text: Color,
    pub border: Color,
}

impl Palette {
    pub fn from_hue(hue: f64) -> Self {
        let hue = normalize_hue(hue);
        Self {
            cell_background: Color::from_hls(hue, CELL_BACKGROUND_LIGHTNESS, SATURATION),
            cell_text: Color::from_hls(hue, CELL_TEXT_LIGHTNESS, SATURATION),
            title_background: Color::from_hls(hue, TITLE_BACKGROUND_LIGHTNESS, SATURATION),
            title_text: Color::from_hls(hue, TITLE_TEXT_LIGHTNESS, SATURATION),
            border: Color::black(),
        }
    }
}

/// Which hue each month uses.
#[derive(Debug, Clone, PartialEq)]
pub enum HueScheme {
    /// One hue for the whole year.
    Single(f64),
    /// January through December.
    PerMonth([f64; 12]),
}

impl Default for HueScheme {
    fn default() -> Self {
        Self::spread(DEFAULT_START_DEGREES, DEFAULT_END_DEGREES)
    }
}

impl HueScheme {
    /// Accepts exactly one hue or one per month.
    pub fn from_hues(hues: &[f64]) -> Result<Self> {
        match hues {
            [hue] => Ok(Self::Single(*hue)),
            _ => {
                let per_month: [f64; 12] = hues
                    .try_into()
                    .map_err(|_| CalendarError::InvalidHues(hues.len()))?;
                Ok(Self::PerMonth(per_month))
            }
        }
    }

    /// Twelve evenly spaced hues from `start` to `end`, both inclusive.
    pub fn spread(start: f64, end: f64) -> Self {
        let step = (end - start) / 11.0;
        let mut hues = [0.0; 12];
        for (index, hue) in hues.iter_mut().enumerate() {
            *hue = start + step * index as f64;
        }
        Self::PerMonth(hues)
    }

    /// Raw hue for `month` (1-based), as configured.
    pub fn hue_for(&self, month: u32) -> f64 {
        match self {
            HueScheme::Single(hue) => *hue,
            HueScheme::PerMonth(hues) => {
                let index = (month.clamp(1, 12) - 1) as usize;
                hues[index]
            }
        }
    }

    pub fn palette_for(&self, month: u32) -> Palette {
        Palette::from_hue(self.hue_for(month))
    }

    /// The hues as a flat list.
    pub fn hues(&self) -> Vec<f64> {
        match self {
            HueScheme::Single(hue) => vec![*hue],
            HueScheme::PerMonth(hues) => hues.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_normalize_hue() {
        assert_close(normalize_hue(0.5), 0.5);
        assert_close(normalize_hue(1.0), 1.0);
        assert_close(normalize_hue(180.0), 0.5);
        assert_close(normalize_hue(90.0), 0.25);
    }

    #[test]
    fn test_degrees_and_fractions_agree() {
        assert_eq!(Palette::from_hue(240.0), Palette::from_hue(240.0 / 360.0));
    }

    #[test]
    fn test_default_spread() {
        let scheme = HueScheme::default();
        assert_close(scheme.hue_for(1), 120.0);
        assert_close(scheme.hue_for(12), 330.0);
        assert_close(scheme.hue_for(2) - scheme.hue_for(1), 210.0 / 11.0);
    }

    #[test]
    fn test_from_hues_counts() {
        assert_eq!(HueScheme::from_hues(&[0.3]).unwrap(), HueScheme::Single(0.3));

        let twelve: Vec<f64> = (0..12).map(|i| i as f64 * 30.0).collect();
        let scheme = HueScheme::from_hues(&twelve).unwrap();
        assert_close(scheme.hue_for(4), 90.0);

        assert!(matches!(
            HueScheme::from_hues(&[]),
            Err(CalendarError::InvalidHues(0))
        ));
        assert!(matches!(
            HueScheme::from_hues(&[0.1, 0.2, 0.3]),
            Err(CalendarError::InvalidHues(3))
        ));
    }

    #[test]
    fn test_single_hue_applies_to_every_month() {
        let scheme = HueScheme::Single(0.6);
        assert!((1..=12).all(|month| scheme.hue_for(month) == 0.6));
    }

    #[test]
    fn test_palette_lightness() {
        // Pure red at full saturation: lightness maps straight onto the red
        // channel below 0.5 and blends towards white above it.
        let palette = Palette::from_hue(0.0);

        assert_eq!(palette.title_background, Color::from_hls(0.0, 0.15, 1.0));
        match palette.cell_background {
            Color::Rgb(r, g, b) => {
                assert_close(r, 1.0);
                assert_close(g, 0.8);
                assert_close(b, 0.8);
            }
            other => panic!("expected RGB, got {other:?}"),
        }
        match palette.cell_text {
            Color::Rgb(r, g, b) => {
                assert_close(r, 0.3);
                assert_close(g, 0.0);
                assert_close(b, 0.0);
            }
            other => panic!("expected RGB, got {other:?}"),
        }
        assert_eq!(palette.border, Color::black());
    }
}
