//! Game timing and answer table.

use crate::{
    input::Direction,
    time::Duration,
};

/// Tunable parameters of the game loop.
///
/// Build one with [`GameConfig::DEFAULT`] and adjust individual fields with
/// the `with_*` setters:
///
/// ```
/// use timesup::{GameConfig, time::Duration};
///
/// let config = GameConfig::DEFAULT.with_round_limit(Duration::secs(15));
/// assert_eq!(config.round_limit, Duration::secs(15));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Interval between control-loop ticks.
    pub tick_period: Duration,
    /// Pause after an answer before the next glyph appears.
    pub glyph_window: Duration,
    /// Total answering time available in one round.
    pub round_limit: Duration,
    /// How long the end-of-round summary stays up.
    pub end_delay: Duration,
    /// Expected input for each glyph angle, indexed by quarter turns.
    pub correct_direction_by_angle: [Direction; 4],
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        tick_period: Duration::millis(10),
        glyph_window: Duration::secs(1),
        round_limit: Duration::secs(8),
        end_delay: Duration::secs(3),
        correct_direction_by_angle: [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ],
    };

    #[must_use]
    pub const fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    #[must_use]
    pub const fn with_glyph_window(mut self, glyph_window: Duration) -> Self {
        self.glyph_window = glyph_window;
        self
    }

    #[must_use]
    pub const fn with_round_limit(mut self, round_limit: Duration) -> Self {
        self.round_limit = round_limit;
        self
    }

    #[must_use]
    pub const fn with_end_delay(mut self, end_delay: Duration) -> Self {
        self.end_delay = end_delay;
        self
    }

    #[must_use]
    pub const fn with_correct_directions(mut self, directions: [Direction; 4]) -> Self {
        self.correct_direction_by_angle = directions;
        self
    }

    /// Direction that answers a glyph turned by `quarter_turns` × 90°.
    #[must_use]
    pub const fn expected_direction(&self, quarter_turns: usize) -> Direction {
        self.correct_direction_by_angle[quarter_turns % 4]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
