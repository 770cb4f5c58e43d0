/// Represents a color in PDF documents.
///
/// Supports RGB, Grayscale, and CMYK color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Creates an RGB color from hue, lightness and saturation.
    ///
    /// All three components are in 0.0-1.0; the hue wraps around.
    pub fn from_hls(hue: f64, lightness: f64, saturation: f64) -> Self {
        let lightness = lightness.clamp(0.0, 1.0);
        let saturation = saturation.clamp(0.0, 1.0);

        if saturation == 0.0 {
            return Color::rgb(lightness, lightness, lightness);
        }

        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;

        Color::rgb(
            hls_channel(m1, m2, hue + ONE_THIRD),
            hls_channel(m1, m2, hue),
            hls_channel(m1, m2, hue - ONE_THIRD),
        )
    }

    /// Black color (gray 0.0).
    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// White color (gray 1.0).
    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    /// Red color (RGB 1,0,0).
    pub fn red() -> Self {
        Color::Rgb(1.0, 0.0, 0.0)
    }

    /// Fill operator for this color (`rg`, `g` or `k`).
    pub(crate) fn fill_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} rg"),
            Color::Gray(g) => format!("{g:.3} g"),
            Color::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} k"),
        }
    }

    /// Stroke operator for this color (`RG`, `G` or `K`).
    pub(crate) fn stroke_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} RG"),
            Color::Gray(g) => format!("{g:.3} G"),
            Color::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} K"),
        }
    }
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(color: Color, expected: (f64, f64, f64)) {
        match color {
            Color::Rgb(r, g, b) => {
                assert!((r - expected.0).abs() < 1e-9, "red {r} != {}", expected.0);
                assert!((g - expected.1).abs() < 1e-9, "green {g} != {}", expected.1);
                assert!((b - expected.2).abs() < 1e-9, "blue {b} != {}", expected.2);
            }
            other => panic!("Expected RGB color, got {other:?}"),
        }
    }

    #[test]
    fn test_rgb_clamps() {
        assert_eq!(Color::rgb(1.5, -0.5, 0.5), Color::Rgb(1.0, 0.0, 0.5));
        assert_eq!(Color::gray(2.0), Color::Gray(1.0));
    }

    #[test]
    fn test_from_hls_primaries() {
        assert_rgb(Color::from_hls(0.0, 0.5, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(Color::from_hls(ONE_THIRD, 0.5, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(Color::from_hls(TWO_THIRDS, 0.5, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_hls_zero_saturation_is_gray() {
        assert_rgb(Color::from_hls(0.7, 0.25, 0.0), (0.25, 0.25, 0.25));
    }

    #[test]
    fn test_from_hls_light_tint() {
        // Pale green used as a cell background.
        assert_rgb(Color::from_hls(ONE_THIRD, 0.9, 1.0), (0.8, 1.0, 0.8));
    }

    #[test]
    fn test_from_hls_hue_wraps() {
        assert_eq!(Color::from_hls(1.0, 0.5, 1.0), Color::from_hls(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_operators() {
        assert_eq!(Color::rgb(1.0, 0.5, 0.0).fill_operator(), "1.000 0.500 0.000 rg");
        assert_eq!(Color::black().stroke_operator(), "0.000 G");
        assert_eq!(
            Color::Cmyk(0.1, 0.2, 0.3, 0.4).fill_operator(),
            "0.100 0.200 0.300 0.400 k"
        );
    }
}
