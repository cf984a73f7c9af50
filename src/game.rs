//! Round state machine.
//!
//! [`next_state`] is a pure function of the previous state, at most one
//! latched input, the current time and an entropy source. It never touches
//! the frame or the latch; the returned [`Gate`] tells the caller what to do
//! with the latch.

use crate::{
    config::GameConfig,
    glyph::Rotation,
    input::InputEvent,
    time::{
        self,
        Duration,
        Instant,
    },
};

/// Value shown in place of a best reaction time when there is none.
pub const NO_REACTION_MS: i32 = 999;

/// Which part of the game is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Attract animation between rounds; any input starts a round.
    Idle,
    /// A round is in progress.
    GlyphWindow,
    /// The summary is on screen.
    RoundEnd,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::GlyphWindow => "glyph-window",
            Self::RoundEnd => "round-end",
        }
    }
}

/// Orientation of the arrow glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Angle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// Pick an angle from the low two bits of a random word.
    #[must_use]
    pub const fn from_entropy(word: u32) -> Self {
        match word & 3 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    #[must_use]
    pub const fn rotation(self) -> Rotation {
        match self {
            Self::Deg0 => Rotation::R0,
            Self::Deg90 => Rotation::R90,
            Self::Deg180 => Rotation::R180,
            Self::Deg270 => Rotation::R270,
        }
    }
}

/// Outcome of the last answer in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What the caller must do with the input latch after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gate {
    /// Leave the latch alone.
    Keep,
    /// Drop any pending input and start accepting.
    Enable,
    /// Drop any pending input and stop accepting.
    Disable,
}

/// Source of randomness for glyph angles.
pub trait Entropy {
    fn next_u32(&mut self) -> u32;
}

/// Everything the game remembers between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub phase: Phase,
    pub angle: Angle,
    pub glyph_shown: bool,
    pub verdict: Option<Verdict>,
    /// Answering time banked by correct answers this round.
    pub elapsed: Duration,
    /// When the current glyph became answerable. Survives wrong answers.
    pub enable_start: Option<Instant>,
    /// When the pause before the next glyph began.
    pub delay_start: Option<Instant>,
    pub round_end_start: Option<Instant>,
    pub score: u32,
    pub min_reaction: Option<Duration>,
    pub attract_step: usize,
    /// Time of the transition that produced this state.
    pub clock: Instant,
}

impl GameState {
    /// Fresh idle state.
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self {
            phase: Phase::Idle,
            angle: Angle::Deg0,
            glyph_shown: false,
            verdict: None,
            elapsed: time::ZERO,
            enable_start: None,
            delay_start: None,
            round_end_start: None,
            score: 0,
            min_reaction: None,
            attract_step: 0,
            clock: now,
        }
    }

    /// Banked time plus the running answer window, as of `clock`.
    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        self.elapsed_at(self.clock)
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        match self.enable_start {
            Some(start) => self.elapsed + time::since(now, start),
            None => self.elapsed,
        }
    }

    /// Best reaction in whole milliseconds, or [`NO_REACTION_MS`].
    #[must_use]
    pub fn best_reaction_ms(&self) -> i32 {
        self.min_reaction.map_or(NO_REACTION_MS, |reaction| {
            i32::try_from(reaction.to_millis()).map_or(NO_REACTION_MS, |ms| ms.min(NO_REACTION_MS))
        })
    }

    /// Score in the signed form the digit renderer clamps.
    #[must_use]
    pub fn score_for_display(&self) -> i32 {
        i32::try_from(self.score).unwrap_or(i32::MAX)
    }
}

/// Result of one step of the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub gate: Gate,
}

impl Transition {
    const fn keep(state: GameState) -> Self {
        Self {
            state,
            gate: Gate::Keep,
        }
    }
}

/// Number of attract-animation steps before the snake returns to the start.
#[must_use]
pub const fn attract_period(spiral_len: usize) -> usize {
    if spiral_len < 2 {
        1
    } else {
        2 * (spiral_len - 1)
    }
}

/// Advance the game by one tick.
pub fn next_state(
    state: &GameState,
    input: Option<InputEvent>,
    now: Instant,
    config: &GameConfig,
    entropy: &mut impl Entropy,
) -> Transition {
    let mut next = *state;
    next.clock = now;

    match state.phase {
        Phase::Idle => idle(next, input, now),
        Phase::GlyphWindow => glyph_window(next, input, now, config, entropy),
        Phase::RoundEnd => round_end(next, now, config),
    }
}

fn idle(mut next: GameState, input: Option<InputEvent>, now: Instant) -> Transition {
    if input.is_some() {
        info!("round started");
        next.phase = Phase::GlyphWindow;
        next.attract_step = 0;
        next.delay_start = Some(now);
        return Transition {
            state: next,
            gate: Gate::Disable,
        };
    }

    next.attract_step = (next.attract_step + 1) % attract_period(crate::grid::STRIP_LENGTH);
    Transition::keep(next)
}

fn glyph_window(
    mut next: GameState,
    input: Option<InputEvent>,
    now: Instant,
    config: &GameConfig,
    entropy: &mut impl Entropy,
) -> Transition {
    if next.elapsed_at(now) >= config.round_limit {
        info!(
            "time's up, score {}, best {} ms",
            next.score,
            next.best_reaction_ms()
        );
        next.phase = Phase::RoundEnd;
        next.glyph_shown = false;
        next.round_end_start = Some(now);
        return Transition {
            state: next,
            gate: Gate::Disable,
        };
    }

    if next.glyph_shown {
        let Some(event) = input else {
            return Transition::keep(next);
        };
        // A press that began before the glyph appeared is not an answer.
        if next.enable_start.is_some_and(|start| event.at < start) {
            debug!("ignoring {} pressed before the glyph", event.direction.as_str());
            return Transition {
                state: next,
                gate: Gate::Enable,
            };
        }
        answer(&mut next, event, now, config);
        return Transition::keep(next);
    }

    let pause_over = next
        .delay_start
        .is_none_or(|start| time::since(now, start) > config.glyph_window);
    if !pause_over {
        return Transition::keep(next);
    }

    next.angle = Angle::from_entropy(entropy.next_u32());
    debug!("new angle {}", next.angle.degrees());
    if next.enable_start.is_none() {
        next.enable_start = Some(now);
    }
    next.glyph_shown = true;
    next.verdict = None;
    next.delay_start = None;
    Transition {
        state: next,
        gate: Gate::Enable,
    }
}

fn answer(next: &mut GameState, event: InputEvent, now: Instant, config: &GameConfig) {
    next.glyph_shown = false;
    next.delay_start = Some(now);

    let expected = config.expected_direction(next.angle.quarter_turns());
    if event.direction != expected {
        info!(
            "wrong input {}, wanted {}",
            event.direction.as_str(),
            expected.as_str()
        );
        next.verdict = Some(Verdict::Incorrect);
        return;
    }

    let start = next.enable_start.take().unwrap_or(now);
    let reaction = time::since(event.at, start);
    info!("correct input, reaction {} us", reaction.ticks());

    next.score = next.score.saturating_add(1);
    next.elapsed += time::since(now, start);
    next.min_reaction = Some(match next.min_reaction {
        Some(best) if best <= reaction => best,
        _ => reaction,
    });
    next.verdict = Some(Verdict::Correct);
}

fn round_end(next: GameState, now: Instant, config: &GameConfig) -> Transition {
    let started = next.round_end_start.unwrap_or(now);
    if time::since(now, started) < config.end_delay {
        return Transition::keep(next);
    }

    info!("back to idle");
    Transition {
        state: GameState::new(now),
        gate: Gate::Enable,
    }
}
