//! Two-digit score and three-digit time read-outs.

use palette::Srgb;

use crate::{
    assets::{
        DIGITS_4X6,
        DIGITS_5X6,
    },
    framebuffer::FrameBuffer,
    glyph::{
        GeometryError,
        draw_bitmap_offset,
    },
};

/// Largest score that fits the two-digit layout.
pub const MAX_SCORE: i32 = 99;

/// Largest time that fits the three-digit layout.
pub const MAX_TIME: i32 = 999;

const SCORE_COLOR: Srgb<u8> = Srgb::new(2, 2, 2);
const SCORE_ROW: usize = 1;
const SCORE_COLUMNS: [usize; 2] = [2, 8];

// Hundreds red, tens green, units blue.
const TIME_COLORS: [Srgb<u8>; 3] = [Srgb::new(2, 0, 0), Srgb::new(0, 2, 0), Srgb::new(0, 0, 2)];
const TIME_ROW: usize = 8;
const TIME_COLUMNS: [usize; 3] = [1, 6, 11];

/// Tens and units of `score`, clamped to `0..=99`.
#[must_use]
pub fn score_digits(score: i32) -> [usize; 2] {
    let score = score.clamp(0, MAX_SCORE) as usize;
    [score / 10, score % 10]
}

/// Hundreds, tens and units of `time`, clamped to `0..=999`.
#[must_use]
pub fn time_digits(time: i32) -> [usize; 3] {
    let time = time.clamp(0, MAX_TIME) as usize;
    [time / 100, time % 100 / 10, time % 10]
}

/// Draw the score across the top half of the panel.
pub fn draw_score(frame: &mut FrameBuffer, score: i32) -> Result<(), GeometryError> {
    for (digit, column) in score_digits(score).into_iter().zip(SCORE_COLUMNS) {
        draw_bitmap_offset(frame, &DIGITS_5X6[digit], column, SCORE_ROW, SCORE_COLOR)?;
    }
    Ok(())
}

/// Draw a time (milliseconds) across the bottom half of the panel.
pub fn draw_time(frame: &mut FrameBuffer, time: i32) -> Result<(), GeometryError> {
    let digits = time_digits(time);
    for ((digit, column), color) in digits.into_iter().zip(TIME_COLUMNS).zip(TIME_COLORS) {
        draw_bitmap_offset(frame, &DIGITS_4X6[digit], column, TIME_ROW, color)?;
    }
    Ok(())
}
