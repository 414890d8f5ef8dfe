use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub const OPAQUE_ALPHA: u8 = 255;

/// How a channel intensity on [0,1] is converted into a byte.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelQuantization {
    /// `floor(c * 255)`. Matches the headers that were generated historically.
    #[default]
    Truncate,
    /// `round(c * 255)`. Slightly more accurate, but changes existing output.
    Round,
}

impl ChannelQuantization {
    pub fn quantize(&self, channel: f64) -> u8 {
        let scaled = channel * 255.0;
        let scaled = match self {
            ChannelQuantization::Truncate => scaled,
            ChannelQuantization::Round => scaled.round(),
        };
        // `as` truncates toward zero and saturates at the ends of the u8 range.
        scaled.clamp(0.0, 255.0) as u8
    }
}

/**
 * A single color packed into 32 bits, ordered (R, G, B, A) from the most
 * significant byte to the least significant byte.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> PackedRgba {
        PackedRgba(
            (u32::from(red) << 24)
                | (u32::from(green) << 16)
                | (u32::from(blue) << 8)
                | u32::from(OPAQUE_ALPHA),
        )
    }

    pub fn from_channels(channels: &Vector3<f64>, quantization: ChannelQuantization) -> PackedRgba {
        PackedRgba::from_rgb(
            quantization.quantize(channels[0]),
            quantization.quantize(channels[1]),
            quantization.quantize(channels[2]),
        )
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn alpha(&self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for PackedRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_channel_order() {
        let color = PackedRgba::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color.0, 0x123456FF);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert_eq!(color.alpha(), OPAQUE_ALPHA);
        assert_eq!(color.to_string(), "305419519");
    }

    #[test]
    fn test_pack_extremes() {
        assert_eq!(PackedRgba::from_rgb(0, 0, 0).0, 255);
        assert_eq!(PackedRgba::from_rgb(255, 255, 255).0, u32::MAX);
    }

    #[test]
    fn test_truncation_drops_the_fraction() {
        let q = ChannelQuantization::Truncate;
        assert_eq!(q.quantize(0.0), 0);
        assert_eq!(q.quantize(0.001462), 0);
        assert_eq!(q.quantize(0.5), 127);
        assert_eq!(q.quantize(0.999), 254);
        assert_eq!(q.quantize(1.0), 255);
    }

    #[test]
    fn test_rounding_differs_only_above_half() {
        let r = ChannelQuantization::Round;
        let t = ChannelQuantization::Truncate;
        // 0.5 * 255 = 127.5
        assert_eq!(r.quantize(0.5), 128);
        assert_eq!(t.quantize(0.5), 127);
        // 0.2 * 255 = 51.0
        assert_eq!(r.quantize(0.2), t.quantize(0.2));
        assert_eq!(r.quantize(0.999), 255);
    }

    #[test]
    fn test_out_of_range_channels_are_clamped() {
        for q in [ChannelQuantization::Truncate, ChannelQuantization::Round] {
            assert_eq!(q.quantize(-0.2), 0);
            assert_eq!(q.quantize(1.7), 255);
        }
    }

    #[test]
    fn test_from_channels() {
        let channels = Vector3::new(1.0, 0.5, 0.0);
        assert_eq!(
            PackedRgba::from_channels(&channels, ChannelQuantization::Truncate),
            PackedRgba::from_rgb(255, 127, 0)
        );
        assert_eq!(
            PackedRgba::from_channels(&channels, ChannelQuantization::Round),
            PackedRgba::from_rgb(255, 128, 0)
        );
    }

    #[test]
    fn test_quantization_serde_names() {
        assert_eq!(
            serde_json::to_string(&ChannelQuantization::Round).unwrap(),
            "\"round\""
        );
        let parsed: ChannelQuantization = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(parsed, ChannelQuantization::Truncate);
    }
}
