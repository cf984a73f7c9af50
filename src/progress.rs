//! Spiral "fill bar" used for the round timer and the idle animation.

use crate::{
    color::hsv_to_rgb,
    framebuffer::{
        FrameBuffer,
        OFF,
    },
    grid::{
        STRIP_LENGTH,
        SpiralOrder,
    },
    time::Duration,
};

/// Colour of spiral step `step`: the hue cycles twice over the full spiral,
/// running backwards from red, at the dimmest usable value.
#[must_use]
pub fn spiral_color(step: usize) -> palette::Srgb<u8> {
    let hue = (step * 720 / STRIP_LENGTH) % 360;
    hsv_to_rgb(359 - hue as u32, 100, 1)
}

/// Light spiral steps `start..=end` and blank every step before `start`.
///
/// `end` is clamped to the last step and `start` to `end`. Steps after `end`
/// are left as they are.
pub fn draw_spiral(frame: &mut FrameBuffer, spiral: &SpiralOrder, start: usize, end: usize) {
    let end = end.min(STRIP_LENGTH - 1);
    let start = start.min(end);

    for step in 0..start {
        frame.set_index(spiral.strip_index(step), OFF);
    }
    for step in start..=end {
        frame.set_index(spiral.strip_index(step), spiral_color(step));
    }
}

/// Spiral step reached after `elapsed` out of `limit`.
///
/// Saturates instead of overflowing; a zero limit counts as already full.
#[must_use]
pub fn progress_index(elapsed: Duration, limit: Duration) -> usize {
    let limit = limit.ticks();
    if limit == 0 {
        return STRIP_LENGTH;
    }
    let step = elapsed.ticks().saturating_mul(STRIP_LENGTH as u64) / limit;
    usize::try_from(step).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_spiral_range() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        draw_spiral(&mut frame, &spiral, 3, 10);
        assert_eq!(frame.lit_count(), 8);
        assert_eq!(frame.get(spiral.strip_index(3)), spiral_color(3));
        assert_eq!(frame.get(spiral.strip_index(2)), OFF);
        assert_eq!(frame.get(spiral.strip_index(11)), OFF);
    }

    #[test]
    fn test_draw_spiral_clears_before_start_only() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        for i in 0..STRIP_LENGTH {
            frame.set_index_rgb(i, 9, 9, 9);
        }
        draw_spiral(&mut frame, &spiral, 5, 5);
        for step in 0..5 {
            assert_eq!(frame.get(spiral.strip_index(step)), OFF);
        }
        assert_eq!(frame.get(spiral.strip_index(5)), spiral_color(5));
        assert_eq!(frame.get(spiral.strip_index(6)), palette::Srgb::new(9, 9, 9));
    }

    #[test]
    fn test_draw_spiral_clamps() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        draw_spiral(&mut frame, &spiral, 0, 10_000);
        assert_eq!(frame.lit_count(), STRIP_LENGTH);

        let mut frame = FrameBuffer::new();
        draw_spiral(&mut frame, &spiral, 400, 300);
        assert_eq!(frame.lit_count(), 1);
        assert_eq!(
            frame.get(spiral.strip_index(STRIP_LENGTH - 1)),
            spiral_color(STRIP_LENGTH - 1)
        );
    }

    #[test]
    fn test_spiral_color_cycles_twice() {
        // Step 0 is hue 359; the half-way step wraps back to it.
        assert_eq!(spiral_color(0), hsv_to_rgb(359, 100, 1));
        assert_eq!(spiral_color(STRIP_LENGTH / 2), spiral_color(0));
        assert_eq!(spiral_color(0), palette::Srgb::new(2, 0, 1));
    }

    #[test]
    fn test_progress_index() {
        let limit = Duration::micros(8_000_000);
        assert_eq!(progress_index(Duration::micros(0), limit), 0);
        assert_eq!(progress_index(Duration::micros(4_000_000), limit), 128);
        assert_eq!(progress_index(limit, limit), STRIP_LENGTH);
        assert!(progress_index(Duration::micros(u64::MAX), limit) >= STRIP_LENGTH);
        assert_eq!(progress_index(Duration::micros(5), Duration::micros(0)), STRIP_LENGTH);
    }
}
