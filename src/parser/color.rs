use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\(([0-9]+),\s*([0-9]+),\s*([0-9]+)\)").unwrap());

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("background-color {value:?} is not of the form rgb(R, G, B)")]
    Malformed { value: String },
    #[error("{channel} channel {value} is outside 0..=255")]
    ChannelOutOfRange { channel: &'static str, value: String },
}

/// 8-bit RGB color as reported by an inline `background-color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Channels scaled into `[0.0, 1.0]`.
    pub fn normalized(&self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|c| f64::from(c) / 255.0)
    }
}

/// Parse the first `rgb(R, G, B)` occurrence in `value`. Whitespace after the
/// commas is tolerated; `rgba(...)` and named colors are rejected.
pub fn parse_rgb(value: &str) -> Result<Rgb, ColorError> {
    let caps = RGB_RE.captures(value).ok_or_else(|| ColorError::Malformed {
        value: value.to_string(),
    })?;

    let mut channels = [0u8; 3];
    for (i, slot) in channels.iter_mut().enumerate() {
        let digits = &caps[i + 1];
        *slot = digits
            .parse::<u8>()
            .map_err(|_| ColorError::ChannelOutOfRange {
                channel: CHANNEL_NAMES[i],
                value: digits.to_string(),
            })?;
    }

    let [r, g, b] = channels;
    Ok(Rgb { r, g, b })
}

/// Fixed-point, exactly four decimals.
pub fn format_channel(v: f64) -> String {
    format!("{:.4}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(value: &str) -> [String; 3] {
        parse_rgb(value).unwrap().normalized().map(format_channel)
    }

    #[test]
    fn channel_bounds_and_midpoint() {
        assert_eq!(channels("rgb(255, 0, 128)"), ["1.0000", "0.0000", "0.5020"]);
    }

    #[test]
    fn whitespace_after_commas_is_ignored() {
        let expected = parse_rgb("rgb(10,20,30)").unwrap();
        assert_eq!(parse_rgb("rgb(10, 20, 30)").unwrap(), expected);
        assert_eq!(parse_rgb("rgb(10,  20,   30)").unwrap(), expected);
        assert_eq!(parse_rgb("rgb(10,\t20,\n30)").unwrap(), expected);
        assert_eq!(expected, Rgb { r: 10, g: 20, b: 30 });
    }

    #[test]
    fn every_byte_formats_to_four_decimals() {
        for c in 0..=255u8 {
            let s = format_channel(f64::from(c) / 255.0);
            let (int, frac) = s.split_once('.').unwrap();
            assert!(int == "0" || int == "1", "{}", s);
            assert_eq!(frac.len(), 4, "{}", s);
        }
        assert_eq!(format_channel(1.0 / 255.0), "0.0039");
        assert_eq!(format_channel(51.0 / 255.0), "0.2000");
    }

    #[test]
    fn match_is_unanchored() {
        assert_eq!(
            parse_rgb("  rgb(1, 2, 3) ").unwrap(),
            Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn malformed_values() {
        for v in ["blue", "", "rgba(1,2,3,0.5)", "rgb(1 2 3)", "rgb( 1,2,3)", "rgb(1,2)"] {
            assert_eq!(
                parse_rgb(v),
                Err(ColorError::Malformed { value: v.to_string() }),
                "{}",
                v
            );
        }
    }

    #[test]
    fn only_ascii_digits_count() {
        let v = "rgb(\u{0661}, 2, 3)";
        assert_eq!(parse_rgb(v), Err(ColorError::Malformed { value: v.to_string() }));
    }

    #[test]
    fn channel_above_255_is_rejected() {
        assert_eq!(
            parse_rgb("rgb(0, 300, 0)"),
            Err(ColorError::ChannelOutOfRange {
                channel: "green",
                value: "300".into()
            })
        );
    }
}
