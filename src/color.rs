//! Integer HSV → RGB conversion.
//!
//! The progress bar depends on the exact channel ramps below, so this stays
//! integer-only instead of going through `palette`'s float `Hsv`.

use palette::Srgb;

/// Convert a hue in degrees and saturation/value on a 0–100 scale to RGB.
///
/// Hue wraps modulo 360. Saturation and value above 100 are treated as 100.
#[must_use]
pub fn hsv_to_rgb(hue: u32, saturation: u32, value: u32) -> Srgb<u8> {
    let hue = hue % 360;
    let saturation = saturation.min(100);
    let value = value.min(100);

    let rgb_max = value * 255 / 100;
    let rgb_min = rgb_max * (100 - saturation) / 100;

    let hextant = hue / 60;
    let diff = hue % 60;

    // Amount one channel ramps by across the current hextant.
    let adj = (rgb_max - rgb_min) * diff / 60;

    let (r, g, b) = match hextant {
        0 => (rgb_max, rgb_min + adj, rgb_min),
        1 => (rgb_max - adj, rgb_max, rgb_min),
        2 => (rgb_min, rgb_max, rgb_min + adj),
        3 => (rgb_min, rgb_max - adj, rgb_max),
        4 => (rgb_min + adj, rgb_min, rgb_max),
        _ => (rgb_max, rgb_min, rgb_max - adj),
    };

    Srgb::new(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0, 100, 100), Srgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120, 100, 100), Srgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240, 100, 100), Srgb::new(0, 0, 255));
    }

    #[test]
    fn test_hextant_ramps() {
        // Halfway through each hextant one channel sits at half of max.
        assert_eq!(hsv_to_rgb(30, 100, 100), Srgb::new(255, 127, 0));
        assert_eq!(hsv_to_rgb(90, 100, 100), Srgb::new(128, 255, 0));
        assert_eq!(hsv_to_rgb(150, 100, 100), Srgb::new(0, 255, 127));
        assert_eq!(hsv_to_rgb(210, 100, 100), Srgb::new(0, 128, 255));
        assert_eq!(hsv_to_rgb(270, 100, 100), Srgb::new(127, 0, 255));
        assert_eq!(hsv_to_rgb(330, 100, 100), Srgb::new(255, 0, 128));
    }

    #[test]
    fn test_dim_value_truncates() {
        // v = 1 gives a maximum channel of 2 (1 * 2.55, truncated).
        assert_eq!(hsv_to_rgb(0, 100, 1), Srgb::new(2, 0, 0));
        assert_eq!(hsv_to_rgb(359, 100, 1), Srgb::new(2, 0, 1));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(200, 0, 100), Srgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(17, 0, 40), Srgb::new(102, 102, 102));
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert_eq!(hsv_to_rgb(0, 250, 400), hsv_to_rgb(0, 100, 100));
    }

    proptest! {
        #[test]
        fn prop_hue_is_periodic(hue in 0_u32..360, turns in 1_u32..1000, s in 0_u32..=100, v in 0_u32..=100) {
            prop_assert_eq!(hsv_to_rgb(hue, s, v), hsv_to_rgb(hue + 360 * turns, s, v));
        }
    }
}
