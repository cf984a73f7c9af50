//! Microsecond time base shared by the game logic and the input path.
//!
//! Timestamps are plain tick counts so the state machine can be driven from
//! tests without a running timer driver; the firmware feeds it from
//! `embassy_time::Instant::now()`.

/// A point in time, in microseconds since boot.
pub type Instant = fugit::TimerInstantU64<1_000_000>;

/// A span of time with microsecond resolution.
pub type Duration = fugit::MicrosDurationU64;

/// Zero-length duration.
pub const ZERO: Duration = Duration::from_ticks(0);

/// Time elapsed from `earlier` to `now`, saturating at zero if the clock
/// reads earlier than `earlier`.
#[must_use]
pub fn since(now: Instant, earlier: Instant) -> Duration {
    now.checked_duration_since(earlier).unwrap_or(ZERO)
}
