//! Owns the game state and frame, and applies the state machine once per tick.

use crate::{
    config::GameConfig,
    framebuffer::FrameBuffer,
    game::{
        Entropy,
        GameState,
        Gate,
        next_state,
    },
    grid::SpiralOrder,
    input::InputLatch,
    render::{
        draw_boot_summary,
        render,
    },
    time::Instant,
};

/// The game loop body.
///
/// Each [`tick`](GameController::tick) takes at most one latched input,
/// advances the state machine, applies the returned gate to the latch and
/// redraws the frame.
pub struct GameController<'l> {
    config: GameConfig,
    state: GameState,
    latch: &'l InputLatch,
    spiral: SpiralOrder,
    frame: FrameBuffer,
}

impl<'l> GameController<'l> {
    /// Start idle with the latch open, so the first press starts a round.
    pub fn new(config: GameConfig, latch: &'l InputLatch, now: Instant) -> Self {
        latch.enable();
        Self {
            config,
            state: GameState::new(now),
            latch,
            spiral: SpiralOrder::build(),
            frame: FrameBuffer::new(),
        }
    }

    /// Run one step of the game and return the frame to present.
    pub fn tick(&mut self, now: Instant, entropy: &mut impl Entropy) -> &FrameBuffer {
        let input = self.latch.take();
        let transition = next_state(&self.state, input, now, &self.config, entropy);

        if transition.state.phase != self.state.phase {
            info!(
                "phase {} -> {}",
                self.state.phase.as_str(),
                transition.state.phase.as_str()
            );
        }
        self.state = transition.state;

        match transition.gate {
            Gate::Keep => {}
            Gate::Enable => self.latch.enable(),
            Gate::Disable => self.latch.disable(),
        }

        if let Err(e) = render(&self.state, &self.config, &self.spiral, &mut self.frame) {
            error!("render failed: {}", e);
        }
        &self.frame
    }

    /// Frame shown at power-on: score 0 and no reaction time.
    pub fn boot_frame(&mut self) -> &FrameBuffer {
        if let Err(e) = draw_boot_summary(&mut self.frame) {
            error!("boot frame failed: {}", e);
        }
        &self.frame
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Clear the latch and accept the next press.
    pub fn enable_input(&self) {
        self.latch.enable();
    }

    /// Clear the latch and ignore presses until re-enabled.
    pub fn disable_input(&self) {
        self.latch.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::{
            Phase,
            Verdict,
            tests::{
                Scripted,
                ms,
            },
        },
        input::{
            Direction,
            InputEvent,
        },
        render::{
            ARROW_COLOR,
            CHECK_COLOR,
            CROSS_COLOR,
        },
    };

    fn press(direction: Direction, millis: u64) -> InputEvent {
        InputEvent {
            direction,
            at: ms(millis),
        }
    }

    fn count(frame: &FrameBuffer, color: palette::Srgb<u8>) -> usize {
        frame.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_new_opens_latch() {
        let latch = InputLatch::new();
        let controller = GameController::new(GameConfig::DEFAULT, &latch, ms(0));
        assert!(latch.is_enabled());
        assert_eq!(controller.state().phase, Phase::Idle);

        controller.disable_input();
        assert!(!latch.is_enabled());
        controller.enable_input();
        assert!(latch.is_enabled());
    }

    #[test]
    fn test_boot_frame_shows_summary() {
        let latch = InputLatch::new();
        let mut controller = GameController::new(GameConfig::DEFAULT, &latch, ms(0));
        let frame = controller.boot_frame().clone();
        let mut expected = FrameBuffer::new();
        crate::render::draw_summary(&mut expected, 0, 999).unwrap();
        assert_eq!(frame, expected);
    }

    #[test]
    fn test_full_round() {
        // Angles: 90° then 180°.
        let mut entropy = Scripted::new(&[1, 2]);
        let latch = InputLatch::new();
        let mut controller = GameController::new(GameConfig::DEFAULT, &latch, ms(0));

        controller.tick(ms(10), &mut entropy);
        assert_eq!(controller.state().phase, Phase::Idle);

        // Any direction starts the round and closes the gate.
        assert!(latch.offer(press(Direction::Right, 15)));
        controller.tick(ms(20), &mut entropy);
        assert_eq!(controller.state().phase, Phase::GlyphWindow);
        assert!(!latch.is_enabled());
        assert!(!latch.offer(press(Direction::Up, 25)));

        // First glyph once the pause has passed.
        let frame = controller.tick(ms(1_030), &mut entropy);
        assert!(count(frame, ARROW_COLOR) > 0);
        assert!(controller.state().glyph_shown);
        assert!(latch.is_enabled());

        // Correct answer for 90°.
        assert!(latch.offer(press(Direction::Up, 1_230)));
        let frame = controller.tick(ms(1_240), &mut entropy);
        assert!(count(frame, CHECK_COLOR) > 0);
        assert_eq!(controller.state().score, 1);
        assert_eq!(controller.state().best_reaction_ms(), 200);
        assert!(!latch.is_enabled(), "one input per window");

        // Second glyph, answered wrongly.
        controller.tick(ms(2_250), &mut entropy);
        assert!(controller.state().glyph_shown);
        assert!(latch.offer(press(Direction::Up, 2_300)));
        let frame = controller.tick(ms(2_300), &mut entropy);
        assert!(count(frame, CROSS_COLOR) > 0);
        assert_eq!(controller.state().verdict, Some(Verdict::Incorrect));

        // The clock keeps running until the limit is used up.
        let banked = 210;
        let limit_hit = 2_250 + 8_000 - banked;
        controller.tick(ms(limit_hit - 1), &mut entropy);
        assert_eq!(controller.state().phase, Phase::GlyphWindow);
        controller.tick(ms(limit_hit), &mut entropy);
        assert_eq!(controller.state().phase, Phase::RoundEnd);
        assert!(!latch.is_enabled());

        let mut summary = FrameBuffer::new();
        crate::render::draw_summary(&mut summary, 1, 200).unwrap();
        assert_eq!(controller.tick(ms(limit_hit + 10), &mut entropy), &summary);

        // Held for the end delay, then idle with the gate open.
        controller.tick(ms(limit_hit + 3_000), &mut entropy);
        assert_eq!(controller.state().phase, Phase::Idle);
        assert_eq!(controller.state().score, 0);
        assert!(latch.is_enabled());
    }
}
