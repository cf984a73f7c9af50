//! Draws a [`GameState`] into a frame.

use palette::Srgb;

use crate::{
    assets,
    config::GameConfig,
    digits::{
        draw_score,
        draw_time,
    },
    framebuffer::FrameBuffer,
    game::{
        GameState,
        NO_REACTION_MS,
        Phase,
        Verdict,
        attract_period,
    },
    glyph::{
        GeometryError,
        Rotation,
        draw_bitmap_rotated,
    },
    grid::SpiralOrder,
    progress::{
        draw_spiral,
        progress_index,
    },
};

pub const ARROW_COLOR: Srgb<u8> = Srgb::new(1, 1, 1);
pub const CHECK_COLOR: Srgb<u8> = Srgb::new(0, 2, 0);
pub const CROSS_COLOR: Srgb<u8> = Srgb::new(2, 0, 0);

/// Cells lit by the idle snake.
const SNAKE_LENGTH: usize = 5;

/// Clear `frame` and draw `state` onto it.
///
/// On error the frame holds whatever was drawn before the failing blit.
pub fn render(
    state: &GameState,
    config: &GameConfig,
    spiral: &SpiralOrder,
    frame: &mut FrameBuffer,
) -> Result<(), GeometryError> {
    frame.clear();
    match state.phase {
        Phase::Idle => {
            let head = attract_head(state.attract_step, spiral.len());
            draw_spiral(frame, spiral, head, head + SNAKE_LENGTH - 1);
            Ok(())
        }
        Phase::GlyphWindow => {
            let fill = progress_index(state.total_elapsed(), config.round_limit);
            draw_spiral(frame, spiral, 0, fill);
            if state.glyph_shown {
                return draw_bitmap_rotated(
                    frame,
                    &assets::ARROW_LEFT,
                    state.angle.rotation(),
                    ARROW_COLOR,
                );
            }
            // Verdict symbols are always drawn upright.
            match state.verdict {
                Some(Verdict::Correct) => {
                    draw_bitmap_rotated(frame, &assets::CHECK, Rotation::R0, CHECK_COLOR)
                }
                Some(Verdict::Incorrect) => {
                    draw_bitmap_rotated(frame, &assets::CROSS, Rotation::R0, CROSS_COLOR)
                }
                None => Ok(()),
            }
        }
        Phase::RoundEnd => {
            draw_summary(frame, state.score_for_display(), state.best_reaction_ms())
        }
    }
}

/// Clear `frame` and show a score and a time in milliseconds.
pub fn draw_summary(
    frame: &mut FrameBuffer,
    score: i32,
    time_ms: i32,
) -> Result<(), GeometryError> {
    frame.clear();
    draw_score(frame, score)?;
    draw_time(frame, time_ms)
}

/// The power-on splash: no score, no reaction time.
pub fn draw_boot_summary(frame: &mut FrameBuffer) -> Result<(), GeometryError> {
    draw_summary(frame, 0, NO_REACTION_MS)
}

/// First spiral step of the idle snake at animation step `step`.
///
/// The head runs inward over `0..len-1`, then back out from `len-1` to `1`.
#[must_use]
pub fn attract_head(step: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    let step = step % attract_period(len);
    if step < last { step } else { 2 * last - step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        framebuffer::OFF,
        game::{
            Angle,
            tests::ms,
        },
        grid::STRIP_LENGTH,
        progress::spiral_color,
        time::Duration,
    };

    fn glyph_cells(frame: &FrameBuffer, color: Srgb<u8>) -> usize {
        frame.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_attract_head_bounces() {
        let len = STRIP_LENGTH;
        assert_eq!(attract_head(0, len), 0);
        assert_eq!(attract_head(254, len), 254);
        assert_eq!(attract_head(255, len), 255);
        assert_eq!(attract_head(256, len), 254);
        assert_eq!(attract_head(509, len), 1);
        assert_eq!(attract_head(510, len), 0);
    }

    #[test]
    fn test_idle_draws_snake() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        let mut state = GameState::new(ms(0));
        state.attract_step = 10;
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        assert_eq!(frame.lit_count(), SNAKE_LENGTH);
        assert_eq!(frame.get(spiral.strip_index(10)), spiral_color(10));
        assert_eq!(frame.get(spiral.strip_index(14)), spiral_color(14));
        assert_eq!(frame.get(spiral.strip_index(15)), OFF);
    }

    #[test]
    fn test_idle_snake_shrinks_at_centre() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        let mut state = GameState::new(ms(0));
        state.attract_step = 254;
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        assert_eq!(frame.lit_count(), 2);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        for i in 0..STRIP_LENGTH {
            frame.set_index_rgb(i, 50, 50, 50);
        }
        let state = GameState::new(ms(0));
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        assert_eq!(frame.lit_count(), SNAKE_LENGTH);
    }

    #[test]
    fn test_glyph_window_draws_arrow_and_progress() {
        let spiral = SpiralOrder::build();
        let mut frame = FrameBuffer::new();
        let mut state = GameState::new(ms(4_000));
        state.phase = Phase::GlyphWindow;
        state.glyph_shown = true;
        state.angle = Angle::Deg90;
        state.enable_start = Some(ms(2_000));
        state.elapsed = Duration::millis(2_000);
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();

        // Half the round gone: the first half of the spiral is lit, with the
        // arrow drawn on top.
        for step in 0..STRIP_LENGTH {
            let cell = frame.get(spiral.strip_index(step));
            let bar = if step <= 128 { spiral_color(step) } else { OFF };
            assert!(cell == bar || cell == ARROW_COLOR, "step {step}");
        }
        assert_eq!(frame.get(spiral.strip_index(0)), spiral_color(0));

        let mut arrow = FrameBuffer::new();
        draw_bitmap_rotated(&mut arrow, &assets::ARROW_LEFT, Rotation::R90, ARROW_COLOR).unwrap();
        assert_eq!(glyph_cells(&frame, ARROW_COLOR), arrow.lit_count());
    }

    #[test]
    fn test_verdict_symbols() {
        let spiral = SpiralOrder::build();
        let mut state = GameState::new(ms(1_000));
        state.phase = Phase::GlyphWindow;
        state.verdict = Some(Verdict::Correct);

        let mut frame = FrameBuffer::new();
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        let mut check = FrameBuffer::new();
        draw_bitmap_rotated(&mut check, &assets::CHECK, Rotation::R0, CHECK_COLOR).unwrap();
        assert_eq!(glyph_cells(&frame, CHECK_COLOR), check.lit_count());

        state.verdict = Some(Verdict::Incorrect);
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        assert_eq!(glyph_cells(&frame, CHECK_COLOR), 0);
        assert!(glyph_cells(&frame, CROSS_COLOR) > 0);
    }

    #[test]
    fn test_round_end_summary() {
        let spiral = SpiralOrder::build();
        let mut state = GameState::new(ms(0));
        state.phase = Phase::RoundEnd;
        state.score = 12;
        state.min_reaction = Some(Duration::millis(345));

        let mut frame = FrameBuffer::new();
        render(&state, &GameConfig::DEFAULT, &spiral, &mut frame).unwrap();
        let mut expected = FrameBuffer::new();
        draw_score(&mut expected, 12).unwrap();
        draw_time(&mut expected, 345).unwrap();
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_boot_summary_shows_no_reaction() {
        let mut frame = FrameBuffer::new();
        draw_boot_summary(&mut frame).unwrap();
        let mut expected = FrameBuffer::new();
        draw_score(&mut expected, 0).unwrap();
        draw_time(&mut expected, 999).unwrap();
        assert_eq!(frame, expected);
    }
}
